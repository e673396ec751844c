use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the scroll offset sits relative to the trigger range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerZone {
    Before,
    Active,
    After,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Scrolled forward past the start.
    Enter,
    /// Scrolled forward past the end.
    Leave,
    /// Scrolled backward past the end.
    EnterBack,
    /// Scrolled backward past the start.
    LeaveBack,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reset,
    Restart,
    Complete,
    Reverse,
    None,
}

impl FromStr for ToggleAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reset" => ToggleAction::Reset,
            "restart" => ToggleAction::Restart,
            "complete" => ToggleAction::Complete,
            "reverse" => ToggleAction::Reverse,
            "none" => ToggleAction::None,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reset => "reset",
            ToggleAction::Restart => "restart",
            ToggleAction::Complete => "complete",
            ToggleAction::Reverse => "reverse",
            ToggleAction::None => "none",
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back, written as four
/// space-separated words, e.g. `"play none none reverse"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub fn action_for(&self, event: ToggleEvent) -> ToggleAction {
        match event {
            ToggleEvent::Enter => self.on_enter,
            ToggleEvent::Leave => self.on_leave,
            ToggleEvent::EnterBack => self.on_enter_back,
            ToggleEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    /// Play once on enter, ignore everything else.
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidToggleActions(s.to_string());
        let actions = s
            .split_whitespace()
            .map(|word| word.parse::<ToggleAction>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match actions.as_slice() {
            &[on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(actions: ToggleActions) -> Self {
        actions.to_string()
    }
}

/// Scroll position and the pixel range that maps onto progress [0, 1].
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start: f32,
    end: f32,
    offset: f32,
    zone: TriggerZone,
}

impl ScrollTrigger {
    /// The scrollable extent runs from 0 to `end`.
    pub fn new(start: f32, end: f32) -> Self {
        let mut trigger = Self {
            start,
            end,
            offset: 0.0,
            zone: TriggerZone::Before,
        };
        trigger.zone = trigger.zone_of(0.0);
        trigger
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn zone(&self) -> TriggerZone {
        self.zone
    }

    pub fn max_offset(&self) -> f32 {
        self.end.max(0.0)
    }

    /// Raw scroll progress, unsmoothed and uneased.
    pub fn progress(&self) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if self.offset >= self.end { 1.0 } else { 0.0 };
        }
        ((self.offset - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn scroll_by(&mut self, delta: f32) -> Vec<ToggleEvent> {
        self.scroll_to(self.offset + delta)
    }

    /// Moves to `offset` (clamped to the scrollable extent) and reports
    /// every range boundary crossed, in order.
    pub fn scroll_to(&mut self, offset: f32) -> Vec<ToggleEvent> {
        if offset.is_nan() {
            return Vec::new();
        }
        self.offset = offset.clamp(0.0, self.max_offset());

        let next = self.zone_of(self.offset);
        let events = match (self.zone, next) {
            (TriggerZone::Before, TriggerZone::Active) => vec![ToggleEvent::Enter],
            (TriggerZone::Before, TriggerZone::After) => vec![ToggleEvent::Enter, ToggleEvent::Leave],
            (TriggerZone::Active, TriggerZone::After) => vec![ToggleEvent::Leave],
            (TriggerZone::After, TriggerZone::Active) => vec![ToggleEvent::EnterBack],
            (TriggerZone::After, TriggerZone::Before) => {
                vec![ToggleEvent::EnterBack, ToggleEvent::LeaveBack]
            }
            (TriggerZone::Active, TriggerZone::Before) => vec![ToggleEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;
        events
    }

    fn zone_of(&self, offset: f32) -> TriggerZone {
        if offset < self.start {
            TriggerZone::Before
        } else if offset > self.end {
            TriggerZone::After
        } else {
            TriggerZone::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_linear_in_offset() {
        let mut trigger = ScrollTrigger::new(0.0, 12000.0);
        assert_eq!(trigger.progress(), 0.0);
        trigger.scroll_to(3000.0);
        assert_eq!(trigger.progress(), 0.25);
        trigger.scroll_to(12000.0);
        assert_eq!(trigger.progress(), 1.0);
    }

    #[test]
    fn test_offset_is_clamped_to_extent() {
        let mut trigger = ScrollTrigger::new(0.0, 1000.0);
        trigger.scroll_by(-50.0);
        assert_eq!(trigger.offset(), 0.0);
        trigger.scroll_by(5000.0);
        assert_eq!(trigger.offset(), 1000.0);
        trigger.scroll_to(f32::NAN);
        assert_eq!(trigger.offset(), 1000.0);
    }

    #[test]
    fn test_starts_active_when_start_is_zero() {
        let trigger = ScrollTrigger::new(0.0, 1000.0);
        assert_eq!(trigger.zone(), TriggerZone::Active);
    }

    #[test]
    fn test_toggle_actions_parse() {
        let actions: ToggleActions = "play pause resume reverse".parse().unwrap();
        assert_eq!(actions.action_for(ToggleEvent::Enter), ToggleAction::Play);
        assert_eq!(actions.action_for(ToggleEvent::Leave), ToggleAction::Pause);
        assert_eq!(actions.action_for(ToggleEvent::EnterBack), ToggleAction::Resume);
        assert_eq!(actions.action_for(ToggleEvent::LeaveBack), ToggleAction::Reverse);
        assert_eq!(actions.to_string(), "play pause resume reverse");
    }

    #[test]
    fn test_toggle_actions_default() {
        assert_eq!(ToggleActions::default().to_string(), "play none none none");
    }

    #[test]
    fn test_toggle_actions_reject_bad_input() {
        assert!("play none none".parse::<ToggleActions>().is_err());
        assert!("play none none explode".parse::<ToggleActions>().is_err());
    }
}
