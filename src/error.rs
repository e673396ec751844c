use thiserror::Error;

/// Errors raised while building the camera path at start-up.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    #[error("waypoint count must be positive")]
    NoWaypoints,

    #[error("waypoint range must be finite and non-negative, got {0}")]
    InvalidRange(f32),

    #[error("camera path needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),
}

/// Configuration rejected by `SceneConfig::validate`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("margin {margin} leaves no room inside a {width}x{depth} footprint")]
    MarginTooLarge { margin: f32, width: f32, depth: f32 },

    #[error("room dimensions must be positive, got {width}x{height}x{depth}")]
    InvalidRoom { width: f32, height: f32, depth: f32 },

    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },

    #[error("scroll range must end after it starts, got start={start} end={end}")]
    InvalidScrollRange { start: f32, end: f32 },

    #[error("scrub must be non-negative, got {0}")]
    InvalidScrub(f32),

    #[error("tween duration must be non-negative, got {0}")]
    InvalidDuration(f32),

    #[error("lookahead must lie in [0, 1], got {0}")]
    InvalidLookahead(f32),

    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown ease '{0}'")]
    UnknownEase(String),

    #[error("invalid toggle actions '{0}'")]
    InvalidToggleActions(String),

    #[error(transparent)]
    Path(#[from] PathError),
}
