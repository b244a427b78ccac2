//! Compositions: how raw sources become virtual keys
//!
//! A composition reads any of the raw sources and writes the whole
//! [`KeyFrame`] for the current update. The unifier never interprets the
//! result, so sources can be combined freely.

use glam::Vec2;

use super::direction::classify;
use super::event::TouchPoint;
use super::keyboard::{KeyInput, key};
use super::pointer::PointerInput;
use super::touch::TouchInput;
use super::virtual_key::{KeyFrame, VKey};
use crate::geom::{Rect, VecExt};

/// The three raw sources a composition can read
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    pub keyboard: KeyInput,
    pub pointer: PointerInput,
    pub touch: TouchInput,
}

impl InputSources {
    /// First active touch, if any
    pub fn first_touch(&self) -> Option<&TouchPoint> {
        self.touch.active_touches().first()
    }
}

/// Writes one frame of virtual key state
pub trait Composition {
    fn compose(&mut self, sources: &InputSources, frame: &mut KeyFrame);
}

impl<F> Composition for F
where
    F: FnMut(&InputSources, &mut KeyFrame),
{
    fn compose(&mut self, sources: &InputSources, frame: &mut KeyFrame) {
        self(sources, frame)
    }
}

/// One-button games: SPACE is any of Space, Enter, left/right click or a touch
#[derive(Debug, Clone, Copy, Default)]
pub struct OneKey;

impl Composition for OneKey {
    fn compose(&mut self, sources: &InputSources, frame: &mut KeyFrame) {
        let kb = &sources.keyboard;
        let mouse = sources.pointer.state();
        frame.set(
            VKey::SPACE,
            kb.is_down(key::SPACE)
                || kb.is_down(key::ENTER)
                || mouse.left
                || mouse.right
                || sources.touch.is_touching(),
        );
    }
}

/// Left/right games.
///
/// LEFT is the left arrow, left click or a first touch inside `left_area`;
/// RIGHT mirrors it with the right arrow, right click and `right_area`.
/// SPACE and ENTER map to their keys only.
#[derive(Debug, Clone, Copy)]
pub struct TwoDirections {
    pub left_area: Rect,
    pub right_area: Rect,
}

impl Default for TwoDirections {
    /// Halves of a 400x400 canvas
    fn default() -> Self {
        Self {
            left_area: Rect::new(Vec2::ZERO, Vec2::new(200.0, 400.0)),
            right_area: Rect::new(Vec2::new(200.0, 0.0), Vec2::new(200.0, 400.0)),
        }
    }
}

impl Composition for TwoDirections {
    fn compose(&mut self, sources: &InputSources, frame: &mut KeyFrame) {
        let kb = &sources.keyboard;
        let mouse = sources.pointer.state();
        let touch_in = |area: &Rect| {
            sources
                .first_touch()
                .is_some_and(|t| t.pos.is_in_rect(area))
        };

        frame.set(VKey::LEFT, kb.is_down(key::LEFT) || mouse.left || touch_in(&self.left_area));
        frame.set(
            VKey::RIGHT,
            kb.is_down(key::RIGHT) || mouse.right || touch_in(&self.right_area),
        );
        frame.set(VKey::SPACE, kb.is_down(key::SPACE));
        frame.set(VKey::ENTER, kb.is_down(key::ENTER));
    }
}

/// Arrow keys plus SPACE/ENTER, with a virtual stick inside `area`.
///
/// A left-click or touch inside `area` pushes the stick from the area's
/// center; its direction is classified with `tolerance` (45 for four-way,
/// 22.5 for eight-way). The mouse wins over touches. Any click or touch also
/// counts as SPACE so "press any key" screens work on touch devices.
#[derive(Debug, Clone, Copy)]
pub struct SixKeys {
    pub area: Rect,
    pub tolerance: f32,
}

impl SixKeys {
    pub fn new(area: Rect, tolerance: f32) -> Self {
        Self { area, tolerance }
    }

    fn stick_point(&self, sources: &InputSources) -> Option<Vec2> {
        let mouse = sources.pointer.state();
        if mouse.left && mouse.pos.is_in_rect(&self.area) {
            return Some(mouse.pos);
        }
        sources
            .touch
            .active_touches()
            .iter()
            .find(|t| t.pos.is_in_rect(&self.area))
            .map(|t| t.pos)
    }
}

impl Composition for SixKeys {
    fn compose(&mut self, sources: &InputSources, frame: &mut KeyFrame) {
        let kb = &sources.keyboard;
        let mouse = sources.pointer.state();

        frame.set(
            VKey::SPACE,
            kb.is_down(key::SPACE) || mouse.left || sources.touch.is_touching(),
        );
        frame.set(VKey::ENTER, kb.is_down(key::ENTER));
        frame.set(VKey::LEFT, kb.is_down(key::LEFT));
        frame.set(VKey::RIGHT, kb.is_down(key::RIGHT));
        frame.set(VKey::DOWN, kb.is_down(key::DOWN));
        frame.set(VKey::UP, kb.is_down(key::UP));

        let Some(p) = self.stick_point(sources) else {
            frame.touch_pos = None;
            return;
        };
        match classify(p - self.area.center(), self.tolerance) {
            Some(dirs) => {
                // Stick input is OR'd on top of the arrow keys
                frame.or(VKey::LEFT, dirs.left);
                frame.or(VKey::RIGHT, dirs.right);
                frame.or(VKey::DOWN, dirs.down);
                frame.or(VKey::UP, dirs.up);
                frame.touch_pos = Some(p);
            }
            None => frame.touch_pos = None,
        }
    }
}
