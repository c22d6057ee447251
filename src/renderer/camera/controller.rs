use super::{CameraPose, CameraState};
use crate::input::{GestureEvent, TouchPoint};

/// Radians of rotation per pixel of drag
pub const K_ROT: f32 = 0.005;
/// Radius change per pixel of pinch distance change
pub const K_ZOOM: f32 = 0.02;
/// Radius change per scroll-wheel line
pub const K_SCROLL: f32 = 1.0;

/// Per-gesture scratch state, cleared between gestures
#[derive(Debug, Clone, Default, PartialEq)]
struct GestureState {
    last_position: Option<TouchPoint>,
    last_touch_count: usize,
    last_distance: Option<f32>,
}

/// Maps drag and pinch gestures onto the orbit camera
pub struct GestureCameraController {
    state: CameraState,
    gesture: GestureState,
}

impl GestureCameraController {
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            gesture: GestureState::default(),
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn handle(&mut self, event: &GestureEvent) {
        match event {
            GestureEvent::Start(touches) => self.on_gesture_start(touches),
            GestureEvent::Move(touches) => self.on_gesture_move(touches),
            GestureEvent::End => self.on_gesture_end(),
        }
    }

    pub fn on_gesture_start(&mut self, touches: &[TouchPoint]) {
        log::debug!("gesture start with {} touch(es)", touches.len());
        self.gesture = GestureState {
            last_position: TouchPoint::centroid(touches),
            last_touch_count: touches.len(),
            last_distance: None,
        };
    }

    /// Two touches pinch-zoom, anything else drags. Mode is picked per event.
    pub fn on_gesture_move(&mut self, touches: &[TouchPoint]) {
        match touches {
            [a, b] => self.pinch(a.distance(b)),
            _ => self.drag(touches),
        }
    }

    pub fn on_gesture_end(&mut self) {
        log::debug!("gesture end");
        self.gesture.last_distance = None;
    }

    /// Wheel zoom for desktop. Positive lines zoom in.
    pub fn on_scroll(&mut self, lines: f32) {
        self.state.zoom(-lines * K_SCROLL);
    }

    pub fn camera_pose(&self) -> CameraPose {
        CameraPose::from(&self.state)
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.gesture = GestureState::default();
    }

    fn pinch(&mut self, distance: f32) {
        // Leaving drag mode drops the drag baseline.
        self.gesture.last_position = None;

        if let Some(previous) = self.gesture.last_distance {
            let delta = distance - previous;
            self.state.zoom(-delta * K_ZOOM);
        }
        self.gesture.last_distance = Some(distance);
    }

    fn drag(&mut self, touches: &[TouchPoint]) {
        self.gesture.last_distance = None;

        let Some(position) = TouchPoint::centroid(touches) else {
            self.gesture.last_position = None;
            return;
        };

        // A changed finger count moves the centroid without any real drag.
        if let Some(last) = self.gesture.last_position {
            if self.gesture.last_touch_count == touches.len() {
                let dx = position.x - last.x;
                let dy = position.y - last.y;
                self.state.rotate(dx * K_ROT, dy * K_ROT);
            }
        }

        self.gesture.last_position = Some(position);
        self.gesture.last_touch_count = touches.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::state::{MAX_PITCH, MAX_RADIUS, MIN_PITCH, MIN_RADIUS};
    use nalgebra_glm as glm;

    fn p(x: f32, y: f32) -> TouchPoint {
        TouchPoint::new(x, y)
    }

    fn controller(pitch: f32, yaw: f32, radius: f32) -> GestureCameraController {
        GestureCameraController::new(CameraState::new(pitch, yaw, radius))
    }

    /// Two touches on the x axis, `distance` pixels apart
    fn pair(distance: f32) -> [TouchPoint; 2] {
        [p(200.0, 300.0), p(200.0 + distance, 300.0)]
    }

    #[test]
    fn drag_changes_yaw_by_k_rot_per_pixel() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(50.0, 50.0)]);
        c.on_gesture_move(&[p(150.0, 50.0)]);
        assert_eq!(c.state().yaw, 100.0 * 0.005);
        assert_eq!(c.state().pitch, 0.0);
    }

    #[test]
    fn drag_deltas_are_frame_to_frame() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&[p(10.0, 0.0)]);
        c.on_gesture_move(&[p(20.0, 0.0)]);
        c.on_gesture_move(&[p(30.0, 0.0)]);
        assert!((c.state().yaw - 30.0 * K_ROT).abs() < 1e-6);
    }

    #[test]
    fn vertical_drag_changes_pitch() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&[p(0.0, -40.0)]);
        assert_eq!(c.state().pitch, -40.0 * K_ROT);
    }

    #[test]
    fn pitch_stays_clamped_over_any_drag_sequence() {
        let mut c = GestureCameraController::new(CameraState::default());
        c.on_gesture_start(&[p(0.0, 0.0)]);
        let mut y = 0.0;
        for step in [500.0, 900.0, -3000.0, 250.0, 10_000.0, -20_000.0, 1.0] {
            y += step;
            c.on_gesture_move(&[p(0.0, y)]);
            let pitch = c.state().pitch;
            assert!((MIN_PITCH..=MAX_PITCH).contains(&pitch), "pitch {pitch}");
        }
    }

    #[test]
    fn pinch_out_zooms_in() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(200.0, 300.0)]);
        c.on_gesture_move(&pair(100.0));
        assert_eq!(c.state().radius, 10.0);
        c.on_gesture_move(&pair(150.0));
        assert!((c.state().radius - 9.0).abs() < 1e-5);
    }

    #[test]
    fn first_two_touch_event_only_sets_baseline() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&pair(400.0));
        assert_eq!(c.state().radius, 10.0);
    }

    #[test]
    fn zoom_stays_clamped_over_any_pinch_sequence() {
        let mut c = GestureCameraController::new(CameraState::default());
        c.on_gesture_start(&[p(0.0, 0.0)]);
        for distance in [100.0, 2000.0, 10.0, 5000.0, 1.0, 900.0, 80.0] {
            c.on_gesture_move(&pair(distance));
            let radius = c.state().radius;
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&radius), "radius {radius}");
        }
    }

    #[test]
    fn gesture_end_clears_pinch_baseline() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&pair(100.0));
        c.on_gesture_end();

        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&pair(300.0));
        assert_eq!(c.state().radius, 10.0);
    }

    #[test]
    fn switching_modes_never_applies_stale_delta() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&pair(100.0));
        c.on_gesture_move(&pair(120.0));
        let radius = c.state().radius;

        // Lift one finger: first single-touch frame is a new drag baseline.
        c.on_gesture_move(&[p(500.0, 500.0)]);
        assert_eq!(c.state().yaw, 0.0);
        assert_eq!(c.state().pitch, 0.0);

        // Second finger back down: first pinch frame is a new distance baseline.
        c.on_gesture_move(&pair(600.0));
        assert_eq!(c.state().radius, radius);
    }

    #[test]
    fn empty_move_is_a_no_op() {
        let mut c = controller(0.1, 0.2, 10.0);
        c.on_gesture_start(&[]);
        c.on_gesture_move(&[]);
        assert_eq!(c.state(), &CameraState::new(0.1, 0.2, 10.0));
    }

    #[test]
    fn camera_pose_is_idempotent() {
        let mut c = GestureCameraController::new(CameraState::default());
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&[p(37.0, -12.0)]);
        let first = c.camera_pose();
        let second = c.camera_pose();
        assert_eq!(first.position.x.to_bits(), second.position.x.to_bits());
        assert_eq!(first.position.y.to_bits(), second.position.y.to_bits());
        assert_eq!(first.position.z.to_bits(), second.position.z.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn pose_reflects_spherical_state() {
        let c = controller(0.0, 0.0, 10.0);
        let pose = c.camera_pose();
        assert_eq!(pose.position, glm::vec3(0.0, 0.0, 10.0));
        assert_eq!(pose.target, glm::Vec3::zeros());
        assert_eq!(pose.up, glm::vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn near_vertical_pose_is_clamped_but_close() {
        let c = controller(std::f32::consts::FRAC_PI_2, 0.0, 10.0);
        let pose = c.camera_pose();
        assert!(pose.position.x.abs() < 1e-6);
        assert!((pose.position.y - 10.0).abs() < 0.05);
        assert!(pose.position.z > 0.0 && pose.position.z < 1.0);
    }

    #[test]
    fn scroll_zooms_within_bounds() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.on_scroll(2.0);
        assert_eq!(c.state().radius, 8.0);
        c.on_scroll(100.0);
        assert_eq!(c.state().radius, MIN_RADIUS);
        c.on_scroll(-100.0);
        assert_eq!(c.state().radius, MAX_RADIUS);
    }

    #[test]
    fn handle_dispatches_gesture_events() {
        let mut c = controller(0.0, 0.0, 10.0);
        c.handle(&GestureEvent::Start(vec![p(0.0, 0.0)]));
        c.handle(&GestureEvent::Move(vec![p(20.0, 0.0)]));
        c.handle(&GestureEvent::End);
        assert_eq!(c.state().yaw, 20.0 * K_ROT);
    }

    #[test]
    fn reset_restores_startup_view() {
        let mut c = GestureCameraController::new(CameraState::default());
        c.on_gesture_start(&[p(0.0, 0.0)]);
        c.on_gesture_move(&[p(80.0, 80.0)]);
        c.reset();
        assert_eq!(c.state(), &CameraState::default());
    }
}
