//! Easing curves addressed by GSAP-style names such as `power4.out`.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EaseFamily {
    /// `power0` is linear; `powerN` raises to `N + 1`.
    Power(u8),
    Sine,
    Expo,
    Circ,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ease {
    pub family: EaseFamily,
    pub direction: EaseDirection,
}

impl Ease {
    pub const LINEAR: Ease = Ease {
        family: EaseFamily::Power(0),
        direction: EaseDirection::Out,
    };

    pub const fn power(degree: u8, direction: EaseDirection) -> Self {
        Ease {
            family: EaseFamily::Power(degree),
            direction,
        }
    }

    /// Maps linear progress in [0, 1] to eased progress. Input is clamped.
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self.direction {
            EaseDirection::In => self.ease_in(x),
            EaseDirection::Out => 1.0 - self.ease_in(1.0 - x),
            EaseDirection::InOut => {
                if x < 0.5 {
                    self.ease_in(x * 2.0) / 2.0
                } else {
                    1.0 - self.ease_in((1.0 - x) * 2.0) / 2.0
                }
            }
        }
    }

    fn ease_in(&self, x: f32) -> f32 {
        match self.family {
            EaseFamily::Power(degree) => x.powi(degree as i32 + 1),
            EaseFamily::Sine => 1.0 - (x * PI / 2.0).cos(),
            EaseFamily::Expo => {
                if x == 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (x - 1.0))
                }
            }
            EaseFamily::Circ => 1.0 - (1.0 - x * x).max(0.0).sqrt(),
        }
    }
}

impl Default for Ease {
    /// `power1.out`
    fn default() -> Self {
        Ease::power(1, EaseDirection::Out)
    }
}

impl FromStr for Ease {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownEase(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let (name, direction) = match lowered.split_once('.') {
            Some((name, "in")) => (name, EaseDirection::In),
            Some((name, "out")) => (name, EaseDirection::Out),
            Some((name, "inout")) => (name, EaseDirection::InOut),
            Some(_) => return Err(unknown()),
            None => (lowered.as_str(), EaseDirection::Out),
        };

        let family = match name {
            "none" | "linear" => return Ok(Ease::LINEAR),
            "quad" => EaseFamily::Power(1),
            "cubic" => EaseFamily::Power(2),
            "quart" => EaseFamily::Power(3),
            "quint" | "strong" => EaseFamily::Power(4),
            "sine" => EaseFamily::Sine,
            "expo" => EaseFamily::Expo,
            "circ" => EaseFamily::Circ,
            power => match power.strip_prefix("power").map(str::parse::<u8>) {
                Some(Ok(degree)) if degree <= 4 => EaseFamily::Power(degree),
                _ => return Err(unknown()),
            },
        };

        Ok(Ease { family, direction })
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.family {
            EaseFamily::Power(0) => return f.write_str("none"),
            EaseFamily::Power(degree) => format!("power{}", degree),
            EaseFamily::Sine => "sine".to_string(),
            EaseFamily::Expo => "expo".to_string(),
            EaseFamily::Circ => "circ".to_string(),
        };
        let direction = match self.direction {
            EaseDirection::In => "in",
            EaseDirection::Out => "out",
            EaseDirection::InOut => "inOut",
        };
        write!(f, "{}.{}", name, direction)
    }
}

impl TryFrom<String> for Ease {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}
