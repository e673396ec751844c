pub mod controller;
pub mod path;

use glam::Vec3;

use crate::types::CameraUniform;

pub use controller::{on_progress_update, Bounds, CameraPose, PathFollowController, DEFAULT_LOOKAHEAD};
pub use path::{clamp_progress, generate_waypoints, CameraPath, CurveType};

/// Below this the look-at direction is treated as undefined.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Perspective render camera. Receives poses from the path controller and
/// viewport changes from the window; the two never interact.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    forward: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// `fov_degrees` is the vertical field of view.
    pub fn new(position: Vec3, target: Vec3, fov_degrees: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::NEG_Z,
            fov_y: fov_degrees.to_radians(),
            aspect: 1.0,
            near,
            far,
        };
        camera.look_at(target);
        camera
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X)
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward)
    }

    /// Turns toward `target`. Returns false and keeps the previous
    /// orientation when the direction is undefined or parallel to world up.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        let Some(direction) = (target - self.position).try_normalize() else {
            return false;
        };
        if direction.cross(Vec3::Y).length_squared() < DEGENERATE_EPSILON {
            return false;
        }
        self.forward = direction;
        true
    }

    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.position = pose.position;
        self.look_at(pose.look_at);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            tan_half_fov: (self.fov_y * 0.5).tan(),
            forward: self.forward.to_array(),
            aspect: self.aspect,
            right: self.right().to_array(),
            near: self.near,
            up: self.up().to_array(),
            far: self.far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 5.0, 20.0), Vec3::new(0.0, 5.0, 0.0), 40.0, 0.1, 1000.0)
    }

    #[test]
    fn test_initial_orientation() {
        let camera = camera();
        assert!(camera.forward().distance(Vec3::NEG_Z) < 1e-6);
        assert!(camera.right().distance(Vec3::X) < 1e-6);
        assert!(camera.up().distance(Vec3::Y) < 1e-6);
    }

    #[test]
    fn test_degenerate_look_at_holds_orientation() {
        let mut camera = camera();
        let before = camera.forward();
        assert!(!camera.look_at(camera.position));
        assert!(!camera.look_at(camera.position + Vec3::Y * 3.0));
        assert_eq!(camera.forward(), before);
    }

    #[test]
    fn test_apply_pose_at_path_end() {
        let mut camera = camera();
        camera.apply_pose(&CameraPose {
            position: Vec3::new(10.0, 10.0, 10.0),
            look_at: Vec3::new(20.0, 10.0, 10.0),
        });
        assert!(camera.forward().distance(Vec3::X) < 1e-6);

        // Target equals position
        camera.apply_pose(&CameraPose {
            position: Vec3::new(20.0, 10.0, 10.0),
            look_at: Vec3::new(20.0, 10.0, 10.0),
        });
        assert_eq!(camera.position, Vec3::new(20.0, 10.0, 10.0));
        assert!(camera.forward().distance(Vec3::X) < 1e-6);
    }

    #[test]
    fn test_set_viewport_ignores_zero_size() {
        let mut camera = camera();
        camera.set_viewport(1920, 1080);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        camera.set_viewport(0, 1080);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_basis_is_orthonormal() {
        let mut camera = camera();
        camera.look_at(Vec3::new(30.0, 0.0, -12.0));
        let uniform = camera.to_uniform();
        let f = Vec3::from_array(uniform.forward);
        let r = Vec3::from_array(uniform.right);
        let u = Vec3::from_array(uniform.up);
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!((uniform.tan_half_fov - 20f32.to_radians().tan()).abs() < 1e-6);
    }
}
