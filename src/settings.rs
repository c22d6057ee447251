use serde::{Deserialize, Serialize};

pub const CONFY_APP_NAME: &str = "roomview";

pub const DEFAULT_TEXTURE_SOURCE: &str =
    "https://threejsfundamentals.org/threejs/resources/images/wall.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// URL or local path of the wall texture
    pub texture_source: String,
    /// 0 keeps the fetch pending forever
    pub texture_timeout_secs: u64,
    /// sRGB, converted to linear when the surface is sRGB
    pub placeholder_color: [f32; 3],
    pub clear_color: [f32; 3],
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            texture_source: DEFAULT_TEXTURE_SOURCE.to_string(),
            texture_timeout_secs: 0,
            placeholder_color: [0.5, 0.5, 0.5],
            clear_color: [0.0, 0.0, 0.0],
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            window_width: 480,
            window_height: 860,
        }
    }
}

impl ViewerSettings {
    pub fn load() -> Self {
        match confy::load(CONFY_APP_NAME, "viewer") {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn texture_timeout(&self) -> Option<std::time::Duration> {
        match self.texture_timeout_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}
