use nalgebra_glm as glm;

use super::CameraState;

/// Camera placement derived from the spherical state. Always looks at the origin with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: glm::Vec3,
    pub target: glm::Vec3,
    pub up: glm::Vec3,
}

impl CameraPose {
    pub fn from_spherical(pitch: f32, yaw: f32, radius: f32) -> Self {
        let position = glm::vec3(
            yaw.sin() * radius * pitch.cos(),
            pitch.sin() * radius,
            yaw.cos() * radius * pitch.cos(),
        );
        Self {
            position,
            target: glm::Vec3::zeros(),
            up: glm::vec3(0.0, 1.0, 0.0),
        }
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &self.target, &self.up)
    }

    pub fn view_proj(&self, aspect: f32, fov_y: f32, near: f32, far: f32) -> glm::Mat4 {
        glm::perspective_rh_zo(aspect, fov_y, near, far) * self.view_matrix()
    }
}

impl From<&CameraState> for CameraPose {
    fn from(state: &CameraState) -> Self {
        Self::from_spherical(state.pitch, state.yaw, state.radius)
    }
}
