use super::loader::TextureSource;

#[derive(Debug, Clone, PartialEq)]
pub enum TextureStatus {
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TextureInfo {
    pub wall_id: usize,
    pub source: TextureSource,
    pub status: TextureStatus,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn new(wall_id: usize, source: TextureSource) -> Self {
        Self {
            wall_id,
            source,
            status: TextureStatus::NotLoaded,
            width: 0,
            height: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, TextureStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, TextureStatus::Loaded)
    }

    pub fn has_error(&self) -> bool {
        matches!(self.status, TextureStatus::Failed(_))
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            TextureStatus::NotLoaded => "not loaded".to_string(),
            TextureStatus::Loading => format!("loading {}", self.source),
            TextureStatus::Loaded => format!("loaded ({}x{})", self.width, self.height),
            TextureStatus::Failed(err) => format!("failed: {err}"),
        }
    }
}

/// Per-wall texture bookkeeping
pub struct TextureManager {
    pub textures: Vec<TextureInfo>,
}

impl TextureManager {
    /// One entry per wall, all from the same source
    pub fn new(wall_count: usize, source: &TextureSource) -> Self {
        Self {
            textures: (0..wall_count)
                .map(|id| TextureInfo::new(id, source.clone()))
                .collect(),
        }
    }

    pub fn get_texture(&self, id: usize) -> Option<&TextureInfo> {
        self.textures.get(id)
    }

    pub fn get_texture_mut(&mut self, id: usize) -> Option<&mut TextureInfo> {
        self.textures.get_mut(id)
    }

    pub fn mark_loading(&mut self, id: usize) {
        if let Some(info) = self.get_texture_mut(id) {
            info.status = TextureStatus::Loading;
        }
    }

    pub fn mark_loaded(&mut self, id: usize, width: u32, height: u32) {
        if let Some(info) = self.get_texture_mut(id) {
            info.status = TextureStatus::Loaded;
            info.width = width;
            info.height = height;
        }
    }

    /// Returns false when the error was dropped because the wall already has a texture
    pub fn mark_failed(&mut self, id: usize, error: String) -> bool {
        match self.get_texture_mut(id) {
            Some(info) if !info.is_loaded() => {
                info.status = TextureStatus::Failed(error);
                true
            }
            _ => false,
        }
    }

    pub fn loading_count(&self) -> usize {
        self.textures.iter().filter(|t| t.is_loading()).count()
    }

    pub fn loaded_count(&self) -> usize {
        self.textures.iter().filter(|t| t.is_loaded()).count()
    }

    pub fn error_count(&self) -> usize {
        self.textures.iter().filter(|t| t.has_error()).count()
    }
}
