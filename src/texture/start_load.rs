use crate::app::app::App;
use crate::texture::loader::{TextureLoadResult, load_texture};

impl App {
    /// Kick off one background fetch per wall. Walls stay on the placeholder color until
    /// their result is drained in `poll_texture_results`.
    pub(crate) fn start_texture_loads(&mut self) {
        for wall_id in 0..self.texture_manager.textures.len() {
            self.start_texture_load(wall_id);
        }
    }

    pub(crate) fn start_texture_load(&mut self, wall_id: usize) {
        let Some(info) = self.texture_manager.get_texture(wall_id) else {
            return;
        };
        if info.is_loaded() || info.is_loading() {
            return;
        }

        let source = info.source.clone();
        let timeout = self.texture_timeout;
        let max_dimension = self.renderer.max_texture_dimension();
        let sender = self.texture_sender.clone();
        self.texture_manager.mark_loading(wall_id);

        self.runtime.spawn(async move {
            log::info!("Loading texture for wall {wall_id}: {source}");

            let result = match load_texture(&source, timeout, max_dimension).await {
                Ok(image) => TextureLoadResult::Success { wall_id, image },
                Err(e) => TextureLoadResult::Error {
                    wall_id,
                    error: e.to_string(),
                },
            };
            // Receiver is gone only when the app is shutting down.
            let _ = sender.send(result);
        });
    }

    /// Drain finished loads without blocking the event loop
    pub(crate) fn poll_texture_results(&mut self) {
        while let Ok(result) = self.texture_receiver.try_recv() {
            match result {
                TextureLoadResult::Success { wall_id, image } => {
                    log::info!(
                        "Texture ready for wall {wall_id} ({}x{})",
                        image.width,
                        image.height
                    );
                    match self.renderer.load_wall_texture(wall_id, &image) {
                        Ok(()) => self
                            .texture_manager
                            .mark_loaded(wall_id, image.width, image.height),
                        Err(e) => {
                            log::warn!("Texture for wall {wall_id} rejected, keeping placeholder: {e}");
                            self.texture_manager.mark_failed(wall_id, e.to_string());
                        }
                    }
                }
                TextureLoadResult::Error { wall_id, error } => {
                    if self.texture_manager.mark_failed(wall_id, error.clone()) {
                        log::warn!("Texture for wall {wall_id} failed, keeping placeholder: {error}");
                    } else {
                        log::debug!("Ignoring late error for wall {wall_id}: {error}");
                    }
                }
            }

            if self.texture_manager.loading_count() == 0 {
                log::info!(
                    "Texture loads settled: {} loaded, {} failed",
                    self.texture_manager.loaded_count(),
                    self.texture_manager.error_count()
                );
                for info in &self.texture_manager.textures {
                    log::debug!("wall {}: {}", info.wall_id, info.status_text());
                }
            }
        }
    }
}
