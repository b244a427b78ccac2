//! Multi-touch source

use super::event::{InputEvent, InputSource, TouchPoint};

#[derive(Debug, Clone)]
pub struct TouchInput {
    /// Touches currently on the surface, in platform order
    touches: Vec<TouchPoint>,
    /// Touches seen by the last `take_touch_starts` call
    last_seen: Vec<TouchPoint>,
    attached: bool,
}

impl Default for TouchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchInput {
    pub fn new() -> Self {
        Self {
            touches: Vec::new(),
            last_seen: Vec::new(),
            attached: true,
        }
    }

    pub fn active_touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    pub fn is_touching(&self) -> bool {
        !self.touches.is_empty()
    }

    /// Touches whose id was not present at the previous call
    pub fn take_touch_starts(&mut self) -> Vec<TouchPoint> {
        let started = self
            .touches
            .iter()
            .filter(|t| !self.last_seen.iter().any(|last| last.id == t.id))
            .copied()
            .collect();
        self.last_seen = self.touches.clone();
        started
    }
}

impl InputSource for TouchInput {
    fn handle(&mut self, event: &InputEvent) -> bool {
        if !self.attached {
            return false;
        }
        match event {
            InputEvent::Touches(points) => {
                // Replaced wholesale, never merged
                self.touches.clear();
                self.touches.extend_from_slice(points);
                true
            }
            _ => false,
        }
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("Touch source detached");
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn tp(x: f32, y: f32, id: i32) -> TouchPoint {
        TouchPoint::new(Vec2::new(x, y), id)
    }

    #[test]
    fn test_touches_replaced_wholesale() {
        let mut t = TouchInput::new();
        t.handle(&InputEvent::Touches(vec![tp(1.0, 1.0, 0), tp(2.0, 2.0, 1)]));
        assert_eq!(t.active_touches().len(), 2);

        t.handle(&InputEvent::Touches(vec![tp(3.0, 3.0, 1)]));
        assert_eq!(t.active_touches(), &[tp(3.0, 3.0, 1)]);

        t.handle(&InputEvent::Touches(Vec::new()));
        assert!(!t.is_touching());
    }

    #[test]
    fn test_take_touch_starts() {
        let mut t = TouchInput::new();
        t.handle(&InputEvent::Touches(vec![tp(1.0, 1.0, 7)]));
        assert_eq!(t.take_touch_starts(), vec![tp(1.0, 1.0, 7)]);

        // Same finger moved, a second one arrived
        t.handle(&InputEvent::Touches(vec![tp(4.0, 1.0, 7), tp(9.0, 9.0, 8)]));
        assert_eq!(t.take_touch_starts(), vec![tp(9.0, 9.0, 8)]);
        assert!(t.take_touch_starts().is_empty());
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut t = TouchInput::new();
        t.handle(&InputEvent::Touches(vec![tp(1.0, 1.0, 0)]));
        t.detach();
        t.detach();
        assert!(!t.handle(&InputEvent::Touches(Vec::new())));
        assert!(t.is_touching());
    }
}
