pub mod camera;
mod render;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod uniforms;
pub mod vertex;

pub use renderer::Renderer;
