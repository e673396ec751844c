// config.rs - Scene configuration loaded from JSON, defaults match the demo room
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{Bounds, CurveType, DEFAULT_LOOKAHEAD};
use crate::error::{ConfigError, PathError};
use crate::math::Color;
use crate::scroll::{Ease, EaseDirection, ToggleActions, DEFAULT_LINE_HEIGHT};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub room: RoomConfig,
    pub floor: FloorConfig,
    pub decorations: DecorationConfig,
    pub lights: LightConfig,
    pub camera: CameraConfig,
    pub path: PathConfig,
    pub scroll: ScrollConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub wall_color: Color,
    /// Bottom face of the shell, normally hidden by the floor plane.
    pub bottom_color: Color,
    pub background: Color,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 180.0,
            depth: 300.0,
            wall_color: Color::from_hex(0xffe4c4),
            bottom_color: Color::from_hex(0x808080),
            background: Color::from_hex(0xf5f5dc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    /// `None` renders the floor untextured.
    pub texture: Option<PathBuf>,
    pub repeat: [f32; 2],
    pub color: Color,
    pub shininess: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            texture: Some(PathBuf::from("textures/wood.jpg")),
            repeat: [10.0, 10.0],
            color: Color::WHITE,
            shininess: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Box centres on the floor as (x, z).
    pub positions: Vec<[f32; 2]>,
    pub height: f32,
    pub width_range: [f32; 2],
    pub depth_range: [f32; 2],
    pub palette: Vec<Color>,
    pub shininess: f32,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            positions: vec![
                [-120.0, -120.0],
                [-60.0, -60.0],
                [0.0, 120.0],
                [80.0, 40.0],
                [160.0, -20.0],
                [100.0, -100.0],
            ],
            height: 30.0,
            width_range: [20.0, 25.0],
            depth_range: [20.0, 25.0],
            palette: [0x8b8b83, 0x7e7e79, 0x969690, 0x8c8b8b, 0xa9a9a9]
                .into_iter()
                .map(Color::from_hex)
                .collect(),
            shininess: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub ambient_color: Color,
    pub ambient_intensity: f32,
    pub point_color: Color,
    pub point_intensity: f32,
    pub point_position: [f32; 3],
    /// Distance falloff exponent; 0 keeps the light at full strength.
    pub decay: f32,
    /// Cutoff distance; 0 means unlimited.
    pub distance: f32,
    pub specular: Color,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient_color: Color::WHITE,
            ambient_intensity: 0.5,
            point_color: Color::WHITE,
            point_intensity: 1.0,
            point_position: [0.0, 20.0, 0.0],
            decay: 0.0,
            distance: 0.0,
            specular: Color::from_hex(0x111111),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 40.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 5.0, 20.0],
            target: [0.0, 5.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub waypoint_count: usize,
    pub range: f32,
    pub height: f32,
    pub margin: f32,
    pub lookahead: f32,
    pub curve: CurveType,
    /// Fixed seed for waypoints and decoration sizes; random when absent.
    pub seed: Option<u64>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            waypoint_count: 10,
            range: 140.0,
            height: 10.0,
            margin: 10.0,
            lookahead: DEFAULT_LOOKAHEAD,
            curve: CurveType::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll offset in pixels where progress starts.
    pub start: f32,
    /// Scroll offset in pixels where progress reaches 1; also the scroll extent.
    pub end: f32,
    /// Seconds the animation takes to catch up with the scroll position.
    /// `None` decouples the animation from scroll position and lets
    /// `toggle_actions` drive it instead.
    pub scrub: Option<f32>,
    pub ease: Ease,
    pub pin: bool,
    pub toggle_actions: ToggleActions,
    /// Tween length in seconds when not scrubbing.
    pub duration: f32,
    pub line_height: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 12000.0,
            scrub: Some(12.0),
            ease: Ease::power(4, EaseDirection::Out),
            pin: true,
            toggle_actions: ToggleActions::default(),
            duration: 0.5,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scroll Room".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl SceneConfig {
    /// Reads a JSON config; missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SceneConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Room footprint the camera is confined to.
    pub fn footprint(&self) -> Bounds {
        Bounds::from_footprint(self.room.width, self.room.depth)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let room = &self.room;
        if !(room.width > 0.0 && room.height > 0.0 && room.depth > 0.0) {
            return Err(ConfigError::InvalidRoom {
                width: room.width,
                height: room.height,
                depth: room.depth,
            });
        }

        let path = &self.path;
        if !path.margin.is_finite() || self.footprint().inset(path.margin).is_none() {
            return Err(ConfigError::MarginTooLarge {
                margin: path.margin,
                width: room.width,
                depth: room.depth,
            });
        }
        if path.waypoint_count < 2 {
            return Err(PathError::TooFewWaypoints(path.waypoint_count).into());
        }
        if !path.range.is_finite() || path.range < 0.0 {
            return Err(PathError::InvalidRange(path.range).into());
        }
        if !(0.0..=1.0).contains(&path.lookahead) {
            return Err(ConfigError::InvalidLookahead(path.lookahead));
        }

        let camera = &self.camera;
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(ConfigError::InvalidFov(camera.fov));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::InvalidClipPlanes {
                near: camera.near,
                far: camera.far,
            });
        }

        let scroll = &self.scroll;
        if !(scroll.end > scroll.start) {
            return Err(ConfigError::InvalidScrollRange {
                start: scroll.start,
                end: scroll.end,
            });
        }
        if let Some(scrub) = scroll.scrub {
            if !(scrub >= 0.0) {
                return Err(ConfigError::InvalidScrub(scrub));
            }
        }
        if !(scroll.duration >= 0.0) {
            return Err(ConfigError::InvalidDuration(scroll.duration));
        }

        Ok(())
    }
}
