use glam::Vec3;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::{generate_waypoints, Camera, CameraPath, CameraPose, PathFollowController};
use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::scenes::{create_room_scene, RoomScene};
use crate::scroll::ScrollTween;

/// Everything the event loop and the renderer share: the static scene, the
/// render camera, the path controller and the scroll driver. Built once at
/// start-up and passed around explicitly.
pub struct SceneContext {
    pub scene: RoomScene,
    pub camera: Camera,
    pub controller: PathFollowController,
    pub scroll: ScrollTween,
}

impl SceneContext {
    /// Builds the context, seeding the RNG from `path.seed` or the OS. The
    /// seed is logged either way so a run can be replayed with `--seed`.
    pub fn build(config: &SceneConfig) -> Result<Self, ConfigError> {
        let seed = resolve_seed(config.path.seed);
        info!("Using seed {}", seed);
        Self::build_with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    pub fn build_with_rng<R: Rng>(config: &SceneConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let path_config = &config.path;
        let waypoints =
            generate_waypoints(path_config.waypoint_count, path_config.range, path_config.height, rng)?;
        let path = CameraPath::with_curve(waypoints, path_config.curve)?;
        let controller = PathFollowController::new(path, config.footprint(), path_config.margin)?
            .with_lookahead(path_config.lookahead);

        let scene = create_room_scene(config, rng);

        let camera_config = &config.camera;
        let mut camera = Camera::new(
            Vec3::from_array(camera_config.position),
            Vec3::from_array(camera_config.target),
            camera_config.fov,
            camera_config.near,
            camera_config.far,
        );
        camera.set_viewport(config.window.width, config.window.height);

        Ok(Self {
            scene,
            camera,
            controller,
            scroll: ScrollTween::from_config(&config.scroll),
        })
    }

    /// Advances the scroll animation and, when progress changed, moves the
    /// camera to the matching pose.
    pub fn advance(&mut self, dt: f32) -> Option<CameraPose> {
        let t = self.scroll.tick(dt)?;
        let pose = self.controller.on_progress_update(t);
        self.camera.apply_pose(&pose);
        Some(pose)
    }

    pub fn scroll_by(&mut self, pixels: f32) {
        self.scroll.scroll_by(pixels);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll.scroll_to(offset);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Eased scroll progress currently applied to the camera.
    pub fn progress(&self) -> f32 {
        self.scroll.value()
    }
}

/// The configured seed, or a fresh one from the OS-seeded thread RNG.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(rand::random)
}
