use std::path::PathBuf;

use glam::Vec3;
use log::{debug, info};
use rand::Rng;

use crate::config::SceneConfig;
use crate::math::{Color, AABB};
use crate::types::{BoxData, LightingUniform, ShellData};

/// Index of the bottom face in `ShellData::face_colors`.
const BOTTOM_FACE: usize = 3;

/// Static room geometry and lighting, built once at start-up.
#[derive(Clone, Debug)]
pub struct RoomScene {
    pub shell: ShellData,
    pub boxes: Vec<BoxData>,
    pub lighting: LightingUniform,
    pub floor_texture: Option<PathBuf>,
}

impl RoomScene {
    pub fn bounds(&self) -> AABB {
        self.shell.bounds()
    }
}

/// Builds the room: shell, decorative boxes resting on the floor, lights.
/// Box footprints and colors are drawn from `rng`.
pub fn create_room_scene<R: Rng>(config: &SceneConfig, rng: &mut R) -> RoomScene {
    let room = &config.room;
    let room_bounds = AABB::from_center_size(Vec3::ZERO, Vec3::new(room.width, room.height, room.depth));

    let mut face_colors = [room.wall_color.to_linear(); 6];
    face_colors[BOTTOM_FACE] = room.bottom_color.to_linear();
    let shell = ShellData::new(room_bounds, face_colors);

    let decorations = &config.decorations;
    let mut boxes = Vec::with_capacity(decorations.positions.len());
    for &[x, z] in &decorations.positions {
        let width = sample_between(decorations.width_range, rng);
        let depth = sample_between(decorations.depth_range, rng);
        let color = pick_color(&decorations.palette, rng);
        let bounds = AABB::from_center_size(
            Vec3::new(x, decorations.height / 2.0, z),
            Vec3::new(width, decorations.height, depth),
        );
        if !room_bounds.contains(&bounds) {
            debug!("Decoration at ({}, {}) extends past the room walls", x, z);
        }
        boxes.push(BoxData::from_aabb(bounds, color.to_linear(), decorations.shininess));
    }

    let lighting = create_lighting(config, boxes.len());

    info!(
        "Room scene created: {}x{}x{} room, {} boxes",
        room.width,
        room.height,
        room.depth,
        boxes.len()
    );

    RoomScene {
        shell,
        boxes,
        lighting,
        floor_texture: config.floor.texture.clone(),
    }
}

fn create_lighting(config: &SceneConfig, box_count: usize) -> LightingUniform {
    let lights = &config.lights;
    let floor = &config.floor;
    let scaled = |color: Color, intensity: f32, w: f32| {
        let [r, g, b] = color.to_linear();
        [r * intensity, g * intensity, b * intensity, w]
    };
    let [px, py, pz] = lights.point_position;
    let [fr, fg, fb] = floor.color.to_linear();
    let [sr, sg, sb] = lights.specular.to_linear();
    let [bg_r, bg_g, bg_b] = config.room.background.to_linear();

    LightingUniform {
        background: [bg_r, bg_g, bg_b, 1.0],
        ambient: scaled(lights.ambient_color, lights.ambient_intensity, 0.0),
        light_position: [px, py, pz, lights.decay],
        light_color: scaled(lights.point_color, lights.point_intensity, lights.distance),
        floor_color: [fr, fg, fb, 0.0],
        floor_extent: [
            config.room.width / 2.0,
            config.room.depth / 2.0,
            floor.repeat[0],
            floor.repeat[1],
        ],
        specular: [sr, sg, sb, floor.shininess],
        box_count: box_count as u32,
        _pad: [0; 3],
    }
}

fn sample_between<R: Rng>([lo, hi]: [f32; 2], rng: &mut R) -> f32 {
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}

fn pick_color<R: Rng>(palette: &[Color], rng: &mut R) -> Color {
    if palette.is_empty() {
        Color::WHITE
    } else {
        palette[rng.random_range(0..palette.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_between_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_between([5.0, 5.0], &mut rng), 5.0);
        assert_eq!(sample_between([6.0, 2.0], &mut rng), 6.0);
    }

    #[test]
    fn test_pick_color_empty_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_color(&[], &mut rng), Color::WHITE);
    }

    #[test]
    fn test_bottom_face_uses_floor_gray() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = create_room_scene(&SceneConfig::default(), &mut rng);
        let gray = Color::from_hex(0x808080).to_linear();
        assert_eq!(&scene.shell.face_colors[BOTTOM_FACE][..3], &gray[..]);
        assert_ne!(scene.shell.face_colors[0], scene.shell.face_colors[BOTTOM_FACE]);
    }

    #[test]
    fn test_lighting_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = create_room_scene(&SceneConfig::default(), &mut rng);
        for channel in &scene.lighting.ambient[..3] {
            assert!((channel - 0.5).abs() < 1e-5);
        }
        assert_eq!(scene.lighting.light_position, [0.0, 20.0, 0.0, 0.0]);
        assert_eq!(scene.lighting.floor_extent, [150.0, 150.0, 10.0, 10.0]);
        assert_eq!(scene.lighting.box_count, 6);
    }
}
