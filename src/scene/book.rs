//! A falling book title

use glam::Vec2;

use super::state::Stage;
use crate::entity::{Entity, Spawner};
use crate::geom::{Rect, VecExt};
use crate::render::Surface;

/// Fraction of the canvas height kept as an off-screen band above and below
const MARGIN_RATIO: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Book {
    pub pos: Vec2,
    pub vel: Vec2,
    pub title: String,
    pub font_px: u32,
    finished: bool,
}

impl Book {
    pub fn new(pos: Vec2, vel: Vec2, title: String, font_px: u32) -> Self {
        Self {
            pos,
            vel,
            title,
            font_px,
            finished: false,
        }
    }

    /// Fall speed for a font size: bigger titles fall faster
    pub fn fall_velocity(font_px: u32) -> Vec2 {
        Vec2::new(0.0, 0.016 * font_px as f32 + 0.84)
    }
}

impl<S: Surface> Entity<Stage<S>> for Book {
    fn advance(&mut self, stage: &mut Stage<S>, _spawner: &mut Spawner<Stage<S>>) -> anyhow::Result<()> {
        let size = stage.surface.size();
        let margin = (size.y * MARGIN_RATIO).floor();

        // Drawn one margin higher so titles slide in instead of popping up
        let color = stage.theme.word_color();
        stage.surface.draw_text_center(
            &self.title,
            self.pos - Vec2::new(0.0, margin),
            self.font_px,
            color,
        );

        self.pos += self.vel;

        // Same margin below, so titles slide out before being dropped
        let alive = Rect::new(
            Vec2::new(0.0, -margin),
            Vec2::new(size.x, size.y + margin * 2.0),
        );
        self.finished = !self.pos.is_in_rect(&alive);
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
