//! Opening quote, then a steady stream of falling titles

use glam::Vec2;

use super::book::Book;
use super::state::Stage;
use crate::entity::{Entity, Spawner};
use crate::render::Surface;
use crate::settings::Settings;

/// Shows the welcome quote, then spawns a [`Book`] every
/// `settings.spawn_interval` ticks. Lives for the whole run.
#[derive(Debug, Clone, Default)]
pub struct BookSpawner {
    /// Ticks seen so far
    count: u64,
}

impl BookSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_welcome<S: Surface>(&self, stage: &mut Stage<S>) {
        let size = stage.surface.size();
        let font_px = Settings::scaled_px(stage.settings.quote_px, size.x);
        let center_x = (size.x / 2.0).floor();
        let center_y = (size.y / 2.0).floor();
        let color = stage.theme.word_color();
        let quote = stage.quote;

        stage.surface.draw_text_center(
            quote.text,
            Vec2::new(center_x, center_y * 0.95),
            font_px,
            color,
        );
        stage.surface.draw_text_center(
            quote.author,
            Vec2::new(center_x, center_y * 1.05),
            font_px / 2,
            color,
        );
    }

    fn spawn_book<S: Surface>(
        &self,
        stage: &mut Stage<S>,
        spawner: &mut Spawner<Stage<S>>,
    ) -> anyhow::Result<()> {
        let width = stage.surface.size().x;
        let min_px = Settings::scaled_px(stage.settings.min_title_px, width);
        let max_px = Settings::scaled_px(stage.settings.max_title_px, width);

        let font_px = stage.randint(min_px, max_px);
        let x = stage.randint(0, width as u32) as f32;
        let title = stage.pick_title()?;

        log::debug!("Spawning \"{title}\" at x={x} ({font_px}px)");
        spawner.spawn(Book::new(
            Vec2::new(x, 0.0),
            Book::fall_velocity(font_px),
            title,
            font_px,
        ));
        Ok(())
    }
}

impl<S: Surface> Entity<Stage<S>> for BookSpawner {
    fn advance(&mut self, stage: &mut Stage<S>, spawner: &mut Spawner<Stage<S>>) -> anyhow::Result<()> {
        self.count += 1;

        if self.count <= stage.settings.welcome_frames as u64 {
            self.draw_welcome(stage);
            return Ok(());
        }

        if self.count % stage.settings.spawn_interval.max(1) as u64 == 0 {
            self.spawn_book(stage, spawner)?;
        }
        Ok(())
    }
}
