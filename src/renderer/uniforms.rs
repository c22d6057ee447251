use bytemuck::{Pod, Zeroable};
use nalgebra_glm as glm;

pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

/// Convert an sRGB-encoded color to linear so it displays as written on an sRGB target
pub fn srgb_to_linear(color: [f32; 3]) -> [f32; 3] {
    color.map(|c| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Per-frame scene data, matches `Scene` in shader.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light: [f32; 4],   // direction toward the light + intensity
    pub ambient: [f32; 4], // rgb * intensity + padding
}

impl SceneUniform {
    pub fn new(view_proj: &glm::Mat4) -> Self {
        let dir = glm::normalize(&glm::make_vec3(&LIGHT_POSITION));
        Self {
            view_proj: (*view_proj).into(),
            light: [dir.x, dir.y, dir.z, DIRECTIONAL_INTENSITY],
            ambient: [AMBIENT_INTENSITY, AMBIENT_INTENSITY, AMBIENT_INTENSITY, 0.0],
        }
    }
}

/// Per-wall material, matches `Material` in shader.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub color: [f32; 4],
    pub flags: [f32; 4], // x: has texture
}

impl MaterialUniform {
    /// Flat color shown until the texture arrives
    pub fn placeholder(color: [f32; 3]) -> Self {
        Self {
            color: [color[0], color[1], color[2], 1.0],
            flags: [0.0; 4],
        }
    }

    pub fn textured() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            flags: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_are_16_byte_aligned() {
        assert_eq!(size_of::<SceneUniform>(), 96);
        assert_eq!(size_of::<MaterialUniform>(), 32);
    }

    #[test]
    fn light_points_from_the_corner() {
        let u = SceneUniform::new(&glm::Mat4::identity());
        let expected = 1.0 / 3.0_f32.sqrt();
        for c in &u.light[..3] {
            assert!((c - expected).abs() < 1e-6);
        }
        assert_eq!(u.light[3], DIRECTIONAL_INTENSITY);
        assert_eq!(u.view_proj[0][0], 1.0);
        assert_eq!(u.view_proj[3][3], 1.0);
    }

    #[test]
    fn placeholder_is_untextured() {
        let m = MaterialUniform::placeholder([0.5, 0.5, 0.5]);
        assert_eq!(m.color, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(m.flags[0], 0.0);
        assert_eq!(MaterialUniform::textured().flags[0], 1.0);
    }

    #[test]
    fn srgb_gray_becomes_linear() {
        let [r, g, b] = srgb_to_linear([0.5, 0.5, 0.5]);
        assert!((r - 0.214).abs() < 1e-3, "got {r}");
        assert_eq!(r, g);
        assert_eq!(g, b);

        assert_eq!(srgb_to_linear([0.0, 1.0, 0.02]), [0.0, 1.0, 0.02 / 12.92]);
    }
}
