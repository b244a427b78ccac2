//! Keyboard source

use super::event::{InputEvent, InputSource};

/// DOM `keyCode` values used by the built-in compositions
pub mod key {
    pub const ENTER: u32 = 13;
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

/// Size of the key table; `keyCode` never exceeds it
pub const KEY_TABLE_SIZE: usize = 256;

/// Set of currently held keys
#[derive(Debug, Clone)]
pub struct KeyInput {
    keys: [bool; KEY_TABLE_SIZE],
    attached: bool,
}

impl Default for KeyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInput {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_TABLE_SIZE],
            attached: true,
        }
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.keys.get(code as usize).copied().unwrap_or(false)
    }

    pub fn is_any_down(&self) -> bool {
        self.keys.iter().any(|&k| k)
    }

    fn set(&mut self, code: u32, down: bool) -> bool {
        match self.keys.get_mut(code as usize) {
            Some(slot) => {
                *slot = down;
                true
            }
            None => {
                log::warn!("Ignoring out-of-range key code {code}");
                false
            }
        }
    }
}

impl InputSource for KeyInput {
    fn handle(&mut self, event: &InputEvent) -> bool {
        if !self.attached {
            return false;
        }
        match *event {
            InputEvent::KeyDown(code) => self.set(code, true),
            InputEvent::KeyUp(code) => self.set(code, false),
            _ => false,
        }
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("Keyboard source detached");
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_up() {
        let mut kb = KeyInput::new();
        assert!(!kb.is_any_down());
        assert!(kb.handle(&InputEvent::KeyDown(key::SPACE)));
        assert!(kb.is_down(key::SPACE));
        assert!(!kb.is_down(key::ENTER));
        assert!(kb.is_any_down());
        kb.handle(&InputEvent::KeyUp(key::SPACE));
        assert!(!kb.is_down(key::SPACE));
        assert!(!kb.is_any_down());
    }

    #[test]
    fn test_out_of_range_code_ignored() {
        let mut kb = KeyInput::new();
        assert!(!kb.handle(&InputEvent::KeyDown(1000)));
        assert!(!kb.is_down(1000));
        assert!(!kb.is_any_down());
    }

    #[test]
    fn test_detach_freezes_state() {
        let mut kb = KeyInput::new();
        kb.handle(&InputEvent::KeyDown(key::LEFT));
        kb.detach();
        kb.detach();
        assert!(!kb.is_attached());
        assert!(!kb.handle(&InputEvent::KeyUp(key::LEFT)));
        assert!(kb.is_down(key::LEFT));
    }
}
