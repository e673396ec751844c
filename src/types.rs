use glam::Vec3;

use crate::math::AABB;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub tan_half_fov: f32, // Vertical
    pub forward: [f32; 3],
    pub aspect: f32,
    pub right: [f32; 3],
    pub near: f32,
    pub up: [f32; 3],
    pub far: f32,
}

/// Lights, background and floor parameters for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub background: [f32; 4],
    pub ambient: [f32; 4],        // rgb * intensity
    pub light_position: [f32; 4], // w = decay exponent, 0 disables falloff
    pub light_color: [f32; 4],    // rgb * intensity, w = cutoff distance, 0 = unlimited
    pub floor_color: [f32; 4],    // w unused
    pub floor_extent: [f32; 4],   // half width, half depth, repeat u, repeat v
    pub specular: [f32; 4],       // w = floor shininess
    pub box_count: u32,
    pub _pad: [u32; 3],
}

/// Inward-facing room box, unlit. Face order: +x, -x, +y, -y, +z, -z.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShellData {
    pub min: [f32; 3],
    pub _pad1: f32,
    pub max: [f32; 3],
    pub _pad2: f32,
    pub face_colors: [[f32; 4]; 6],
}

impl ShellData {
    pub fn new(bounds: AABB, face_colors: [[f32; 3]; 6]) -> Self {
        Self {
            min: bounds.min.to_array(),
            _pad1: 0.0,
            max: bounds.max.to_array(),
            _pad2: 0.0,
            face_colors: face_colors.map(|[r, g, b]| [r, g, b, 1.0]),
        }
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(Vec3::from_array(self.min), Vec3::from_array(self.max))
    }
}

/// Solid Phong-shaded box primitive for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub min: [f32; 3],
    pub shininess: f32,
    pub max: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

impl BoxData {
    pub const fn new(min: [f32; 3], max: [f32; 3], color: [f32; 3], shininess: f32) -> Self {
        Self {
            min,
            shininess,
            max,
            _pad: 0.0,
            color: [color[0], color[1], color[2], 1.0],
        }
    }

    pub fn from_aabb(bounds: AABB, color: [f32; 3], shininess: f32) -> Self {
        Self::new(bounds.min.to_array(), bounds.max.to_array(), color, shininess)
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(Vec3::from_array(self.min), Vec3::from_array(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 128);
        assert_eq!(std::mem::size_of::<ShellData>(), 128);
        assert_eq!(std::mem::size_of::<BoxData>(), 48);
    }

    #[test]
    fn test_box_data_bounds_round_trip() {
        let aabb = AABB::new(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 30.0, 2.0));
        let data = BoxData::from_aabb(aabb, [0.5, 0.5, 0.5], 30.0);
        assert_eq!(data.bounds(), aabb);
        assert_eq!(data.color[3], 1.0);
        assert_eq!(data.shininess, 30.0);
    }

    #[test]
    fn test_shell_face_colors_are_opaque() {
        let shell = ShellData::new(
            AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            [[0.1, 0.2, 0.3]; 6],
        );
        assert!(shell.face_colors.iter().all(|c| c[3] == 1.0));
        assert_eq!(shell.bounds().max, Vec3::ONE);
    }
}
