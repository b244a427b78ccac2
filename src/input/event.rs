//! Event boundary between the platform and the raw input sources
//!
//! The platform layer translates DOM events into `InputEvent`s and pushes
//! them, one at a time, into every attached source.

use glam::Vec2;

/// One active touch point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Position in element space
    pub pos: Vec2,
    /// Identifier that stays stable while the same finger moves
    pub id: i32,
}

impl TouchPoint {
    pub fn new(pos: Vec2, id: i32) -> Self {
        Self { pos, id }
    }
}

/// DOM `buttons` bitmask values
pub mod buttons {
    pub const LEFT: u16 = 1;
    pub const RIGHT: u16 = 2;
    pub const MIDDLE: u16 = 4;
}

/// A raw input event
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(u32),
    KeyUp(u32),
    PointerMove(Vec2),
    /// Button state changed (`mousedown`/`mouseup`), with the full bitmask
    PointerButtons { pos: Option<Vec2>, buttons: u16 },
    /// Browser wants to open its context menu
    ContextMenu,
    /// Full list of touches still on the surface (start, move and end alike)
    Touches(Vec<TouchPoint>),
}

impl InputEvent {
    /// DOM event name this variant is normally produced from
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::KeyDown(_) => "keydown",
            InputEvent::KeyUp(_) => "keyup",
            InputEvent::PointerMove(_) => "mousemove",
            InputEvent::PointerButtons { .. } => "mousedown",
            InputEvent::ContextMenu => "contextmenu",
            InputEvent::Touches(_) => "touchmove",
        }
    }
}

/// A passive accumulator of raw input state
pub trait InputSource {
    /// Apply an event. Returns true if the source consumed it, in which case
    /// the platform should suppress the browser default action.
    fn handle(&mut self, event: &InputEvent) -> bool;

    /// Stop listening. Safe to call any number of times; the source keeps
    /// its last state.
    fn detach(&mut self);

    fn is_attached(&self) -> bool;
}
