//! Mouse/pointer source

use glam::Vec2;

use super::event::{InputEvent, InputSource, buttons};

/// Position used before the first move event
pub const OFFSCREEN: Vec2 = Vec2::new(-99999.0, -99999.0);

/// Last known pointer state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Position relative to the target element's top-left corner
    pub pos: Vec2,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: OFFSCREEN,
            left: false,
            middle: false,
            right: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PointerInput {
    state: PointerState,
    attached: bool,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerInput {
    pub fn new() -> Self {
        Self {
            state: PointerState::default(),
            attached: true,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }
}

impl InputSource for PointerInput {
    fn handle(&mut self, event: &InputEvent) -> bool {
        if !self.attached {
            return false;
        }
        match *event {
            InputEvent::PointerMove(pos) => {
                self.state.pos = pos;
                false
            }
            InputEvent::PointerButtons { pos, buttons: mask } => {
                if let Some(pos) = pos {
                    self.state.pos = pos;
                }
                self.state.left = mask & buttons::LEFT != 0;
                self.state.right = mask & buttons::RIGHT != 0;
                self.state.middle = mask & buttons::MIDDLE != 0;
                false
            }
            // Keep right-click usable as a game button
            InputEvent::ContextMenu => true,
            _ => false,
        }
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("Pointer source detached");
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
