use winit::event::TouchPhase;

/// Synthetic finger id used for mouse drags so they share the touch path.
pub const MOUSE_FINGER_ID: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &TouchPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Mean position of a set of touches, `None` when empty
    pub fn centroid(touches: &[TouchPoint]) -> Option<TouchPoint> {
        if touches.is_empty() {
            return None;
        }
        let n = touches.len() as f32;
        let (sx, sy) = touches
            .iter()
            .fold((0.0, 0.0), |(sx, sy), t| (sx + t.x, sy + t.y));
        Some(TouchPoint::new(sx / n, sy / n))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    Start(Vec<TouchPoint>),
    Move(Vec<TouchPoint>),
    End,
}

/// Folds per-finger events into one gesture stream.
/// Fingers keep the order in which they went down.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Vec<(u64, TouchPoint)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn touches(&self) -> Vec<TouchPoint> {
        self.active.iter().map(|(_, p)| *p).collect()
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, location: TouchPoint) -> Option<GestureEvent> {
        match phase {
            TouchPhase::Started => {
                let was_idle = self.active.is_empty();
                match self.position_of(id) {
                    Some(i) => self.active[i].1 = location,
                    None => self.active.push((id, location)),
                }
                if was_idle {
                    Some(GestureEvent::Start(self.touches()))
                } else {
                    Some(GestureEvent::Move(self.touches()))
                }
            }
            TouchPhase::Moved => {
                let i = self.position_of(id)?;
                self.active[i].1 = location;
                Some(GestureEvent::Move(self.touches()))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let i = self.position_of(id)?;
                self.active.remove(i);
                if self.active.is_empty() {
                    Some(GestureEvent::End)
                } else {
                    Some(GestureEvent::Move(self.touches()))
                }
            }
        }
    }

    fn position_of(&self, id: u64) -> Option<usize> {
        self.active.iter().position(|(finger, _)| *finger == id)
    }
}
