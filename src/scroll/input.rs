use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::scroll::ARROW_STEP;

/// A scroll request derived from one input event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollInput {
    /// Relative move in pixels, positive scrolls down (toward the end).
    By(f32),
    ToStart,
    ToEnd,
}

/// Wheel deltas to scroll pixels. Winit reports wheel-up as positive, which
/// moves the page back toward its start.
pub fn wheel_scroll(delta: MouseScrollDelta, line_height: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * line_height,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

pub fn key_scroll(key: KeyCode, viewport_height: f32) -> Option<ScrollInput> {
    match key {
        KeyCode::PageDown | KeyCode::Space => Some(ScrollInput::By(viewport_height)),
        KeyCode::PageUp => Some(ScrollInput::By(-viewport_height)),
        KeyCode::ArrowDown => Some(ScrollInput::By(ARROW_STEP)),
        KeyCode::ArrowUp => Some(ScrollInput::By(-ARROW_STEP)),
        KeyCode::Home => Some(ScrollInput::ToStart),
        KeyCode::End => Some(ScrollInput::ToEnd),
        _ => None,
    }
}
