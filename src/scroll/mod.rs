//! Scroll-linked animation driver: turns wheel and keyboard scrolling into
//! a smoothed, eased progress value.

pub mod ease;
pub mod input;
pub mod trigger;
pub mod tween;

pub use ease::{Ease, EaseDirection, EaseFamily};
pub use input::{key_scroll, wheel_scroll, ScrollInput};
pub use trigger::{ScrollTrigger, ToggleAction, ToggleActions, ToggleEvent, TriggerZone};
pub use tween::ScrollTween;

/// Pixels per wheel "line" on devices that report line deltas.
pub const DEFAULT_LINE_HEIGHT: f32 = 100.0;

/// Pixels per arrow-key press.
pub const ARROW_STEP: f32 = 40.0;
