pub mod loader;
pub mod manager;
mod start_load;

pub use loader::{TextureImage, TextureLoadResult, TextureSource};
pub use manager::TextureManager;
