use std::sync::Arc;

use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::app::App;
use crate::error::{Result, ViewerError};
use crate::settings::ViewerSettings;

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: ViewerSettings,
    pub runtime: Runtime,
    startup_error: Option<ViewerError>,
}

/// Drive the viewer until the window closes. A failure while creating the window or GPU
/// state is handed back once the event loop has stopped.
pub fn run(settings: ViewerSettings, runtime: Runtime) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler::new(settings, runtime);
    event_loop.run_app(&mut handler)?;
    handler.finish()
}

impl AppHandler {
    pub fn new(settings: ViewerSettings, runtime: Runtime) -> Self {
        Self {
            app: None,
            settings,
            runtime,
            startup_error: None,
        }
    }

    fn record_startup_error(&mut self, e: ViewerError) {
        log::error!("Failed to start viewer: {e}");
        self.startup_error = Some(e);
    }

    /// Outcome of the run once the event loop has returned
    pub fn finish(self) -> Result<()> {
        match self.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App> {
        let window_attrs = Window::default_attributes()
            .with_title("roomview")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let runtime_handle = self.runtime.handle().clone();
        self.runtime
            .block_on(App::new(window, runtime_handle, &self.settings))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        match self.create_app(event_loop) {
            Ok(app) => {
                log::info!("Viewer ready, texture source: {}", self.settings.texture_source);
                self.app = Some(app);
            }
            Err(e) => {
                self.record_startup_error(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if let Err(e) = app.render() {
                log::error!("Render error: {e:?}");
                event_loop.exit();
                return;
            }
            app.window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> AppHandler {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        AppHandler::new(ViewerSettings::default(), runtime)
    }

    #[test]
    fn clean_run_finishes_ok() {
        assert!(handler().finish().is_ok());
    }

    #[test]
    fn startup_failure_is_returned_after_the_loop() {
        let mut handler = handler();
        handler.record_startup_error(ViewerError::SurfaceUnsupported("texture formats"));
        assert!(matches!(
            handler.finish(),
            Err(ViewerError::SurfaceUnsupported("texture formats"))
        ));
    }
}
