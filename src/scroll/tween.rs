use log::{debug, warn};

use crate::config::ScrollConfig;
use crate::scroll::ease::{Ease, EaseDirection};
use crate::scroll::trigger::{ScrollTrigger, ToggleAction, ToggleActions, ToggleEvent, TriggerZone};

/// Curve the scrubbed playhead follows while catching up with the scroll
/// position.
const CATCH_UP_EASE: Ease = Ease::power(3, EaseDirection::Out);

#[derive(Copy, Clone, Debug)]
struct CatchUp {
    from: f32,
    to: f32,
    elapsed: f32,
}

#[derive(Clone, Debug)]
enum Playback {
    /// Playhead follows scroll progress, lagging by `lag` seconds.
    Scrub { lag: f32, catch_up: Option<CatchUp> },
    /// Playhead runs on its own clock, started and stopped by toggle events.
    Toggled {
        duration: f32,
        actions: ToggleActions,
        reversed: bool,
        paused: bool,
    },
}

/// Scroll-linked tween of a single value from 0 to 1.
///
/// `tick` advances the animation and reports the eased value whenever it
/// changes; that is the progress-update event for the camera.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    trigger: ScrollTrigger,
    ease: Ease,
    playback: Playback,
    playhead: f32,
    emitted: f32,
}

impl ScrollTween {
    /// Scrubbed tween. `lag` of zero snaps straight to the scroll position.
    pub fn scrubbed(trigger: ScrollTrigger, ease: Ease, lag: f32) -> Self {
        Self::with_playback(
            trigger,
            ease,
            Playback::Scrub {
                lag: lag.max(0.0),
                catch_up: None,
            },
        )
    }

    /// Time-based tween driven by `actions` as the scroll crosses the
    /// trigger range.
    pub fn toggled(trigger: ScrollTrigger, ease: Ease, duration: f32, actions: ToggleActions) -> Self {
        let mut tween = Self::with_playback(
            trigger,
            ease,
            Playback::Toggled {
                duration: duration.max(0.0),
                actions,
                reversed: false,
                paused: true,
            },
        );
        if tween.trigger.zone() == TriggerZone::Active {
            tween.handle_events(&[ToggleEvent::Enter]);
        }
        tween
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        if !config.pin {
            warn!("Unpinned scrolling is not supported by a native surface; the scene stays pinned");
        }
        let trigger = ScrollTrigger::new(config.start, config.end);
        match config.scrub {
            Some(lag) => Self::scrubbed(trigger, config.ease, lag),
            None => Self::toggled(trigger, config.ease, config.duration, config.toggle_actions),
        }
    }

    fn with_playback(trigger: ScrollTrigger, ease: Ease, playback: Playback) -> Self {
        Self {
            trigger,
            ease,
            playback,
            playhead: 0.0,
            emitted: ease.apply(0.0),
        }
    }

    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    /// Linear tween progress before easing.
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        self.ease.apply(self.playhead)
    }

    pub fn is_scrubbed(&self) -> bool {
        matches!(self.playback, Playback::Scrub { .. })
    }

    pub fn scroll_by(&mut self, delta: f32) {
        let events = self.trigger.scroll_by(delta);
        self.handle_events(&events);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        let events = self.trigger.scroll_to(offset);
        self.handle_events(&events);
    }

    /// Advances by `dt` seconds. Returns the eased value if it changed
    /// since the last emission.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        let dt = dt.max(0.0);
        let target = self.trigger.progress();

        match &mut self.playback {
            Playback::Scrub { lag, catch_up } => {
                if *lag <= 0.0 {
                    self.playhead = target;
                } else {
                    let retarget = match catch_up {
                        Some(current) => current.to != target,
                        None => self.playhead != target,
                    };
                    if retarget {
                        *catch_up = Some(CatchUp {
                            from: self.playhead,
                            to: target,
                            elapsed: 0.0,
                        });
                    }
                    if let Some(current) = catch_up {
                        current.elapsed += dt;
                        let k = CATCH_UP_EASE.apply(current.elapsed / *lag);
                        self.playhead = current.from + (current.to - current.from) * k;
                        if current.elapsed >= *lag {
                            self.playhead = current.to;
                            *catch_up = None;
                        }
                    }
                }
            }
            Playback::Toggled {
                duration,
                reversed,
                paused,
                ..
            } => {
                if !*paused {
                    let step = if *duration > 0.0 { dt / *duration } else { 1.0 };
                    let direction = if *reversed { -1.0 } else { 1.0 };
                    self.playhead = (self.playhead + direction * step).clamp(0.0, 1.0);
                    let finished = if *reversed {
                        self.playhead <= 0.0
                    } else {
                        self.playhead >= 1.0
                    };
                    if finished {
                        *paused = true;
                    }
                }
            }
        }

        let value = self.value();
        if value != self.emitted {
            self.emitted = value;
            Some(value)
        } else {
            None
        }
    }

    fn handle_events(&mut self, events: &[ToggleEvent]) {
        let Playback::Toggled {
            actions,
            reversed,
            paused,
            ..
        } = &mut self.playback
        else {
            return;
        };

        for event in events {
            let action = actions.action_for(*event);
            debug!("Scroll toggle {:?} -> {}", event, action);
            match action {
                ToggleAction::Play => {
                    *reversed = false;
                    *paused = false;
                }
                ToggleAction::Pause => *paused = true,
                ToggleAction::Resume => *paused = false,
                ToggleAction::Reset => {
                    self.playhead = 0.0;
                    *reversed = false;
                    *paused = true;
                }
                ToggleAction::Restart => {
                    self.playhead = 0.0;
                    *reversed = false;
                    *paused = false;
                }
                ToggleAction::Complete => {
                    self.playhead = 1.0;
                    *paused = true;
                }
                ToggleAction::Reverse => {
                    *reversed = true;
                    *paused = false;
                }
                ToggleAction::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_zero_snaps() {
        let mut tween = ScrollTween::scrubbed(ScrollTrigger::new(0.0, 1000.0), Ease::LINEAR, 0.0);
        tween.scroll_to(500.0);
        assert_eq!(tween.tick(0.016), Some(0.5));
        assert_eq!(tween.tick(0.016), None);
    }

    #[test]
    fn test_no_emission_before_first_scroll() {
        let mut tween = ScrollTween::scrubbed(ScrollTrigger::new(0.0, 1000.0), Ease::default(), 2.0);
        assert_eq!(tween.tick(0.5), None);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_scrub_lags_then_converges() {
        let mut tween = ScrollTween::scrubbed(ScrollTrigger::new(0.0, 1000.0), Ease::LINEAR, 1.0);
        tween.scroll_to(1000.0);

        let early = tween.tick(0.1).unwrap();
        assert!(early > 0.0 && early < 1.0);

        let mut last = early;
        for _ in 0..9 {
            if let Some(v) = tween.tick(0.1) {
                assert!(v >= last);
                last = v;
            }
        }
        assert_eq!(tween.playhead(), 1.0);
        assert_eq!(tween.tick(0.1), None);
    }

    #[test]
    fn test_scrub_retargets_mid_flight() {
        let mut tween = ScrollTween::scrubbed(ScrollTrigger::new(0.0, 1000.0), Ease::LINEAR, 1.0);
        tween.scroll_to(1000.0);
        tween.tick(0.5);
        let halfway = tween.playhead();

        tween.scroll_to(0.0);
        let next = tween.tick(0.1).unwrap();
        assert!(next < halfway);
        for _ in 0..10 {
            tween.tick(0.1);
        }
        assert_eq!(tween.playhead(), 0.0);
    }

    #[test]
    fn test_toggled_plays_on_enter() {
        let actions = ToggleActions::default();
        let mut tween = ScrollTween::toggled(ScrollTrigger::new(0.0, 1000.0), Ease::LINEAR, 1.0, actions);
        // Trigger starts at offset 0, already inside the range
        assert_eq!(tween.tick(0.25), Some(0.25));
        tween.tick(1.0);
        assert_eq!(tween.value(), 1.0);
        assert_eq!(tween.tick(0.25), None);
    }

    #[test]
    fn test_toggled_reverse_on_leave_back() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        let mut tween =
            ScrollTween::toggled(ScrollTrigger::new(100.0, 1000.0), Ease::LINEAR, 1.0, actions);
        assert_eq!(tween.tick(0.5), None);

        tween.scroll_to(200.0);
        tween.tick(1.0);
        assert_eq!(tween.value(), 1.0);

        tween.scroll_to(0.0);
        assert_eq!(tween.tick(0.5), Some(0.5));
        tween.tick(1.0);
        assert_eq!(tween.value(), 0.0);
    }
}
