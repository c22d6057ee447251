mod controller;
mod pose;
pub mod state;

pub use controller::GestureCameraController;
pub use pose::CameraPose;
pub use state::CameraState;
