use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::error::Result;
use crate::input::{MOUSE_FINGER_ID, TouchPoint, TouchTracker};
use crate::renderer::Renderer;
use crate::renderer::camera::{CameraState, GestureCameraController};
use crate::scene::{ROOM_WALLS, RoomMesh};
use crate::settings::ViewerSettings;
use crate::texture::{TextureLoadResult, TextureManager, TextureSource};

/// Trackpad pixels per wheel line
const PIXELS_PER_LINE: f32 = 20.0;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    fn none() -> Self {
        Self {
            repaint: false,
            exit: false,
        }
    }

    fn repaint() -> Self {
        Self {
            repaint: true,
            exit: false,
        }
    }

    fn exit() -> Self {
        Self {
            repaint: false,
            exit: true,
        }
    }
}

pub struct App {
    pub window: Arc<Window>,
    pub(crate) renderer: Renderer,
    camera_controller: GestureCameraController,
    touch_tracker: TouchTracker,
    mouse_pressed: bool,
    cursor_pos: Option<TouchPoint>,
    pub(crate) texture_manager: TextureManager,
    pub(crate) texture_sender: Sender<TextureLoadResult>,
    pub(crate) texture_receiver: Receiver<TextureLoadResult>,
    pub(crate) texture_timeout: Option<Duration>,
    pub(crate) runtime: tokio::runtime::Handle,
}

impl App {
    pub async fn new(
        window: Arc<Window>,
        runtime: tokio::runtime::Handle,
        settings: &ViewerSettings,
    ) -> Result<Self> {
        let mesh = RoomMesh::build(&ROOM_WALLS);
        let renderer = Renderer::new(window.clone(), settings, &mesh).await?;

        let source = TextureSource::parse(&settings.texture_source);
        let texture_manager = TextureManager::new(mesh.wall_count(), &source);
        let (texture_sender, texture_receiver) = mpsc::channel();

        let mut app = Self {
            window,
            renderer,
            camera_controller: GestureCameraController::new(CameraState::default()),
            touch_tracker: TouchTracker::new(),
            mouse_pressed: false,
            cursor_pos: None,
            texture_manager,
            texture_sender,
            texture_receiver,
            texture_timeout: settings.texture_timeout(),
            runtime,
        };

        app.start_texture_loads();
        Ok(app)
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => EventResponse::exit(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => EventResponse::exit(),
                    Key::Character(c) if c.eq_ignore_ascii_case("r") => {
                        self.camera_controller.reset();
                        EventResponse::repaint()
                    }
                    _ => EventResponse::none(),
                }
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                EventResponse::repaint()
            }
            WindowEvent::Touch(touch) => {
                let location = TouchPoint::new(touch.location.x as f32, touch.location.y as f32);
                self.feed_touch(touch.id, touch.phase, location)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pressed = *state == ElementState::Pressed;
                if pressed == self.mouse_pressed {
                    return EventResponse::none();
                }
                self.mouse_pressed = pressed;
                let Some(position) = self.cursor_pos else {
                    return EventResponse::none();
                };
                let phase = if pressed {
                    TouchPhase::Started
                } else {
                    TouchPhase::Ended
                };
                self.feed_touch(MOUSE_FINGER_ID, phase, position)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = TouchPoint::new(position.x as f32, position.y as f32);
                self.cursor_pos = Some(position);
                if self.mouse_pressed {
                    self.feed_touch(MOUSE_FINGER_ID, TouchPhase::Moved, position)
                } else {
                    EventResponse::none()
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.camera_controller.on_scroll(lines);
                EventResponse::repaint()
            }
            _ => EventResponse::none(),
        }
    }

    fn feed_touch(&mut self, id: u64, phase: TouchPhase, location: TouchPoint) -> EventResponse {
        match self.touch_tracker.touch(id, phase, location) {
            Some(gesture) => {
                self.camera_controller.handle(&gesture);
                EventResponse::repaint()
            }
            None => EventResponse::none(),
        }
    }

    pub fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        self.poll_texture_results();

        let pose = self.camera_controller.camera_pose();
        match self.renderer.render(&pose) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.renderer.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timed out, skipping frame");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
