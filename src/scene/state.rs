//! Per-tick context handed to every scene entity

use anyhow::Context as _;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::quotes::{self, Quote};
use crate::render::Surface;
use crate::settings::{Settings, Theme};

/// Everything an entity may read or change while advancing
pub struct Stage<S> {
    pub surface: S,
    pub settings: Settings,
    pub theme: Theme,
    pub rng: Pcg32,
    pub titles: Vec<String>,
    /// Quote shown on the opening frames
    pub quote: &'static Quote,
}

impl<S: Surface> Stage<S> {
    pub fn new(surface: S, settings: Settings, seed: u64, titles: Vec<String>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let quote = quotes::pick(&mut rng);
        Self {
            surface,
            theme: settings.theme,
            settings,
            rng,
            titles,
            quote,
        }
    }

    /// Uniform integer in `[min, max)`; `min` when the range is empty
    pub fn randint(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// A random title from the list
    pub fn pick_title(&mut self) -> anyhow::Result<String> {
        let len = self.titles.len() as u32;
        let i = self.randint(0, len) as usize;
        self.titles
            .get(i)
            .cloned()
            .context("title list is empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn stage(titles: &[&str]) -> Stage<RecordingSurface> {
        Stage::new(
            RecordingSurface::new(800.0, 600.0),
            Settings::default(),
            42,
            titles.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_randint_bounds() {
        let mut s = stage(&["a"]);
        for _ in 0..200 {
            let v = s.randint(3, 7);
            assert!((3..7).contains(&v));
        }
        assert_eq!(s.randint(5, 5), 5);
        assert_eq!(s.randint(9, 2), 9);
    }

    #[test]
    fn test_pick_title() {
        let mut s = stage(&["only"]);
        assert_eq!(s.pick_title().unwrap(), "only");

        let mut empty = stage(&[]);
        assert!(empty.pick_title().is_err());
    }

    #[test]
    fn test_theme_from_settings() {
        let settings = Settings {
            theme: Theme::Dark,
            ..Default::default()
        };
        let s = Stage::new(RecordingSurface::new(1.0, 1.0), settings, 1, Vec::new());
        assert_eq!(s.theme, Theme::Dark);
    }
}
