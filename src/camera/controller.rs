//! Maps scroll progress to a camera pose on the path, keeping the camera
//! inside the room's footprint.

use glam::Vec3;
use serde::Serialize;

use crate::camera::path::{clamp_progress, CameraPath};
use crate::error::ConfigError;

/// Forward offset in path parameter used to pick the look-at target.
pub const DEFAULT_LOOKAHEAD: f32 = 0.02;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Axis-aligned rectangle in the horizontal (x, z) plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Bounds {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Footprint of a `width` x `depth` room centred on the origin.
    pub fn from_footprint(width: f32, depth: f32) -> Self {
        Self::new(-width / 2.0, width / 2.0, -depth / 2.0, depth / 2.0)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Shrinks every side by `margin`, or `None` if nothing is left.
    pub fn inset(&self, margin: f32) -> Option<Bounds> {
        let inner = Bounds::new(
            self.min_x + margin,
            self.max_x - margin,
            self.min_z + margin,
            self.max_z - margin,
        );
        (inner.min_x <= inner.max_x && inner.min_z <= inner.max_z).then_some(inner)
    }

    /// Clamps x and z into the rectangle shrunk by `margin`; y passes through.
    pub fn clamp(&self, point: Vec3, margin: f32) -> Vec3 {
        Vec3::new(
            clamp_axis(point.x, self.min_x + margin, self.max_x - margin),
            point.y,
            clamp_axis(point.z, self.min_z + margin, self.max_z - margin),
        )
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_z..=self.max_z).contains(&point.z)
    }
}

// max/min instead of f32::clamp so an inverted range never panics.
fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Camera pose for scroll progress `t`.
///
/// Position is the curve point at `t` clamped into `bounds` shrunk by
/// `margin`. The look-at target is the unclamped curve point at
/// `min(t + lookahead, 1)`. At `t = 1` both coincide. `t` outside [0, 1]
/// is clamped.
pub fn on_progress_update(
    t: f32,
    path: &CameraPath,
    bounds: &Bounds,
    margin: f32,
    lookahead: f32,
) -> CameraPose {
    let t = clamp_progress(t);
    let position = bounds.clamp(path.evaluate(t), margin);
    let look_at = path.evaluate((t + lookahead).min(1.0));

    CameraPose { position, look_at }
}

/// Owns the path and clamp settings for the lifetime of the session.
#[derive(Clone, Debug)]
pub struct PathFollowController {
    path: CameraPath,
    bounds: Bounds,
    margin: f32,
    lookahead: f32,
}

impl PathFollowController {
    pub fn new(path: CameraPath, bounds: Bounds, margin: f32) -> Result<Self, ConfigError> {
        if !margin.is_finite() || bounds.inset(margin).is_none() {
            return Err(ConfigError::MarginTooLarge {
                margin,
                width: bounds.width(),
                depth: bounds.depth(),
            });
        }

        Ok(Self {
            path,
            bounds,
            margin,
            lookahead: DEFAULT_LOOKAHEAD,
        })
    }

    pub fn with_lookahead(mut self, lookahead: f32) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    /// Rectangle the camera position is clamped into.
    pub fn clamp_region(&self) -> Bounds {
        // Validated in `new`
        self.bounds.inset(self.margin).unwrap_or(self.bounds)
    }

    pub fn on_progress_update(&self, t: f32) -> CameraPose {
        on_progress_update(t, &self.path, &self.bounds, self.margin, self.lookahead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_path() -> CameraPath {
        CameraPath::new(vec![Vec3::new(-200.0, 10.0, 0.0), Vec3::new(200.0, 10.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_bounds_from_footprint() {
        let bounds = Bounds::from_footprint(300.0, 200.0);
        assert_eq!(bounds, Bounds::new(-150.0, 150.0, -100.0, 100.0));
        assert_eq!(bounds.width(), 300.0);
        assert_eq!(bounds.depth(), 200.0);
    }

    #[test]
    fn test_bounds_inset() {
        let bounds = Bounds::from_footprint(300.0, 300.0);
        assert_eq!(bounds.inset(10.0), Some(Bounds::new(-140.0, 140.0, -140.0, 140.0)));
        assert_eq!(bounds.inset(150.0), Some(Bounds::new(0.0, 0.0, 0.0, 0.0)));
        assert_eq!(bounds.inset(151.0), None);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        let bounds = Bounds::from_footprint(10.0, 10.0);
        let clamped = bounds.clamp(Vec3::new(3.0, 1.0, -3.0), 20.0);
        assert!(clamped.is_finite());
        assert_eq!(clamped.y, 1.0);
    }

    #[test]
    fn test_controller_rejects_oversized_margin() {
        let err = PathFollowController::new(straight_path(), Bounds::from_footprint(20.0, 20.0), 11.0)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MarginTooLarge { .. }));
    }

    #[test]
    fn test_controller_clamps_straight_path() {
        let controller =
            PathFollowController::new(straight_path(), Bounds::from_footprint(300.0, 300.0), 10.0)
                .unwrap();

        let start = controller.on_progress_update(0.0);
        assert_eq!(start.position, Vec3::new(-140.0, 10.0, 0.0));
        // Look-at may sit outside the room
        assert!(start.look_at.x < -140.0);

        let middle = controller.on_progress_update(0.5);
        assert!(middle.position.distance(Vec3::new(0.0, 10.0, 0.0)) < 1e-3);
    }

    #[test]
    fn test_overshoot_matches_endpoints() {
        let controller =
            PathFollowController::new(straight_path(), Bounds::from_footprint(1000.0, 1000.0), 0.0)
                .unwrap();
        assert_eq!(controller.on_progress_update(-0.2), controller.on_progress_update(0.0));
        assert_eq!(controller.on_progress_update(1.3), controller.on_progress_update(1.0));
    }

    #[test]
    fn test_lookahead_override() {
        let controller =
            PathFollowController::new(straight_path(), Bounds::from_footprint(1000.0, 1000.0), 0.0)
                .unwrap()
                .with_lookahead(0.25);
        let pose = controller.on_progress_update(0.25);
        assert!(pose.look_at.distance(Vec3::new(0.0, 10.0, 0.0)) < 1e-3);
        assert_eq!(controller.lookahead(), 0.25);
    }

    #[test]
    fn test_clamp_region() {
        let controller =
            PathFollowController::new(straight_path(), Bounds::from_footprint(300.0, 100.0), 10.0)
                .unwrap();
        assert_eq!(controller.clamp_region(), Bounds::new(-140.0, 140.0, -40.0, 40.0));
    }
}
