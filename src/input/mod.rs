pub mod touch;

pub use touch::{GestureEvent, MOUSE_FINGER_ID, TouchPoint, TouchTracker};
