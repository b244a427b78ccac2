//! Virtual key input
//!
//! Space, Enter, a mouse click or a screen tap can all count as the same
//! "SPACE" press. A [`Composition`] decides the mapping; this type keeps two
//! generations of the result so edge-triggered queries work.
//!
//! Usage: configure once (`configure_one_key()` or `register_composition()`),
//! then call [`VirtualKeyInput::update`] exactly once per frame before any
//! query in that frame.

use glam::Vec2;
use thiserror::Error;

use super::compose::{Composition, InputSources, OneKey, SixKeys, TwoDirections};
use super::direction::{EIGHT_WAY, FOUR_WAY};
use super::event::{InputEvent, InputSource};
use crate::geom::Rect;

/// Number of virtual key slots
pub const MAX_VKEYS: usize = 16;

/// A virtual key slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VKey(u8);

impl VKey {
    pub const SPACE: VKey = VKey(0);
    pub const ENTER: VKey = VKey(1);
    pub const LEFT: VKey = VKey(2);
    pub const RIGHT: VKey = VKey(3);
    pub const DOWN: VKey = VKey(4);
    pub const UP: VKey = VKey(5);

    /// Game-defined slot; `None` past [`MAX_VKEYS`]
    pub fn custom(slot: u8) -> Option<VKey> {
        ((slot as usize) < MAX_VKEYS).then_some(VKey(slot))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// An edge query ran before any frame was unified
    #[error("VirtualKeyInput::update() must be called before edge-triggered queries")]
    NotUpdated,
}

/// Virtual key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyFrame {
    pressed: [bool; MAX_VKEYS],
    /// Point that drove a virtual stick this frame, if any
    pub touch_pos: Option<Vec2>,
}

impl KeyFrame {
    pub fn set(&mut self, key: VKey, down: bool) {
        self.pressed[key.index()] = down;
    }

    /// Press `key` if `down`, otherwise leave it as it is
    pub fn or(&mut self, key: VKey, down: bool) {
        self.pressed[key.index()] |= down;
    }

    pub fn is_pressed(&self, key: VKey) -> bool {
        self.pressed[key.index()]
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }
}

/// Unified virtual key input over keyboard, pointer and touch
pub struct VirtualKeyInput {
    sources: InputSources,
    composition: Option<Box<dyn Composition>>,
    current: KeyFrame,
    /// `None` until the first `update()`
    previous: Option<KeyFrame>,
}

impl Default for VirtualKeyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VirtualKeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualKeyInput")
            .field("configured", &self.is_configured())
            .field("current", &self.current)
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

impl VirtualKeyInput {
    pub fn new() -> Self {
        Self {
            sources: InputSources::default(),
            composition: None,
            current: KeyFrame::default(),
            previous: None,
        }
    }

    /// Install the composition run on every `update()`, replacing any other
    pub fn register_composition(&mut self, composition: impl Composition + 'static) {
        if self.composition.is_some() {
            log::debug!("Replacing virtual key composition");
        }
        self.composition = Some(Box::new(composition));
    }

    pub fn is_configured(&self) -> bool {
        self.composition.is_some()
    }

    /// SPACE = Space/Enter, left/right click or any touch
    pub fn configure_one_key(&mut self) {
        log::info!("Virtual keys: one-key layout");
        self.register_composition(OneKey);
    }

    /// LEFT/RIGHT from arrows, mouse buttons or touches in `left_area`/`right_area`
    pub fn configure_two_directions(&mut self, left_area: Rect, right_area: Rect) {
        log::info!("Virtual keys: two-direction layout");
        self.register_composition(TwoDirections { left_area, right_area });
    }

    /// Arrows plus a four-way virtual stick inside `area`
    pub fn configure_four_directions(&mut self, area: Rect) {
        log::info!("Virtual keys: four-direction layout");
        self.register_composition(SixKeys::new(area, FOUR_WAY));
    }

    /// Arrows plus an eight-way virtual stick inside `area`
    pub fn configure_eight_directions(&mut self, area: Rect) {
        log::info!("Virtual keys: eight-direction layout");
        self.register_composition(SixKeys::new(area, EIGHT_WAY));
    }

    /// Feed a raw event to every source. Returns true if any source consumed it.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let s = &mut self.sources;
        // Non-short-circuit: every source sees every event
        s.keyboard.handle(event) | s.pointer.handle(event) | s.touch.handle(event)
    }

    /// Detach all raw sources; they keep their last state
    pub fn detach(&mut self) {
        self.sources.keyboard.detach();
        self.sources.pointer.detach();
        self.sources.touch.detach();
    }

    pub fn sources(&self) -> &InputSources {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut InputSources {
        &mut self.sources
    }

    /// Start a new frame: keep the old state, then recompute from the sources
    pub fn update(&mut self) {
        self.previous = Some(self.current);
        if let Some(composition) = self.composition.as_mut() {
            self.current = KeyFrame::default();
            composition.compose(&self.sources, &mut self.current);
        }
    }

    pub fn is_pressed(&self, key: VKey) -> bool {
        self.current.is_pressed(key)
    }

    pub fn is_any_pressed(&self) -> bool {
        self.current.any()
    }

    /// Pressed this frame but not in the previous one
    pub fn is_just_pressed(&self, key: VKey) -> Result<bool, InputError> {
        let previous = self.previous.as_ref().ok_or(InputError::NotUpdated)?;
        Ok(self.current.is_pressed(key) && !previous.is_pressed(key))
    }

    /// Stick point from the last update (see [`SixKeys`])
    pub fn touch_pos(&self) -> Option<Vec2> {
        self.current.touch_pos
    }

    pub fn current(&self) -> &KeyFrame {
        &self.current
    }
}
