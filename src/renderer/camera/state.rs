use std::f32::consts::PI;

/// Pitch never reaches true vertical so `look_at` with a +Y up vector stays valid.
pub const MAX_PITCH: f32 = PI / 2.1;
pub const MIN_PITCH: f32 = -MAX_PITCH;

pub const MIN_RADIUS: f32 = 3.0;
pub const MAX_RADIUS: f32 = 25.0;

pub const DEFAULT_PITCH: f32 = PI / 2.3;
pub const DEFAULT_YAW: f32 = PI / 4.0;
pub const DEFAULT_RADIUS: f32 = 24.0;

/// Spherical camera state around the room origin
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub pitch: f32,
    pub yaw: f32,
    pub radius: f32,
    pub default_pitch: f32,
    pub default_yaw: f32,
    pub default_radius: f32,
}

impl CameraState {
    /// Out-of-range pitch and radius are clamped, and the clamped values become the reset point.
    pub fn new(pitch: f32, yaw: f32, radius: f32) -> Self {
        let pitch = clamp_pitch(pitch);
        let radius = clamp_radius(radius);
        Self {
            pitch,
            yaw,
            radius,
            default_pitch: pitch,
            default_yaw: yaw,
            default_radius: radius,
        }
    }

    pub fn reset(&mut self) {
        self.pitch = self.default_pitch;
        self.yaw = self.default_yaw;
        self.radius = self.default_radius;
    }

    pub(crate) fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = clamp_pitch(self.pitch + delta_pitch);
    }

    pub(crate) fn zoom(&mut self, delta_radius: f32) {
        self.radius = clamp_radius(self.radius + delta_radius);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DEFAULT_PITCH, DEFAULT_YAW, DEFAULT_RADIUS)
    }
}

pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(MIN_PITCH, MAX_PITCH)
}

pub fn clamp_radius(radius: f32) -> f32 {
    radius.clamp(MIN_RADIUS, MAX_RADIUS)
}
