//! User settings
//!
//! Persisted as JSON in LocalStorage on the web; natively always the defaults.

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colour theme (toggled at runtime with SPACE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Black titles on white
    #[default]
    Light,
    /// White titles on black
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn inverted(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text colour
    pub fn word_color(&self) -> Color {
        match self {
            Theme::Light => Color::BLACK,
            Theme::Dark => Color::WHITE,
        }
    }

    /// Background colour
    pub fn background_color(&self) -> Color {
        match self {
            Theme::Light => Color::WHITE,
            Theme::Dark => Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tick rate
    pub fps: f32,
    /// Ticks between two new titles
    pub spawn_interval: u32,
    /// Ticks the opening quote stays up
    pub welcome_frames: u32,
    /// Theme at start-up
    pub theme: Theme,
    /// DOM id of the canvas element
    pub canvas_id: String,

    // Font sizes are given for a 1920px wide canvas and scaled to the real width
    /// Smallest title font (px)
    pub min_title_px: u32,
    /// Largest title font (px, exclusive)
    pub max_title_px: u32,
    /// Quote font (px); the author line uses half
    pub quote_px: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: 75.0,
            spawn_interval: 15,
            welcome_frames: 150,
            theme: Theme::Light,
            canvas_id: "canvas".to_string(),
            min_title_px: 10,
            max_title_px: 60,
            quote_px: 30,
        }
    }
}

impl Settings {
    /// Width font sizes are specified for
    pub const REFERENCE_WIDTH: f32 = 1920.0;

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "book_rain_settings";

    /// Fix up values that would stall or break the scene
    pub fn sanitized(mut self) -> Self {
        if !self.fps.is_finite() || self.fps < 1.0 {
            log::warn!("Invalid fps {}, using default", self.fps);
            self.fps = Self::default().fps;
        }
        self.spawn_interval = self.spawn_interval.max(1);
        self.max_title_px = self.max_title_px.max(self.min_title_px + 1);
        self
    }

    /// Scale a reference font size to a canvas `width`
    pub fn scaled_px(px: u32, width: f32) -> u32 {
        (px as f32 * width / Self::REFERENCE_WIDTH) as u32
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_names() {
        assert_eq!(Theme::from_str("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str("sepia"), None);
    }

    #[test]
    fn test_theme_inversion_swaps_colors() {
        let light = Theme::Light;
        let dark = light.inverted();
        assert_eq!(dark, Theme::Dark);
        assert_eq!(light.word_color(), dark.background_color());
        assert_eq!(dark.inverted(), Theme::Light);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"fps": 30.0, "theme": "Dark"}"#).unwrap();
        assert_eq!(s.fps, 30.0);
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.spawn_interval, 15);
        assert_eq!(s.canvas_id, "canvas");
    }

    #[test]
    fn test_sanitized() {
        let s = Settings {
            fps: 0.0,
            spawn_interval: 0,
            min_title_px: 40,
            max_title_px: 20,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.fps, 75.0);
        assert_eq!(s.spawn_interval, 1);
        assert_eq!(s.max_title_px, 41);
    }

    #[test]
    fn test_scaled_px() {
        assert_eq!(Settings::scaled_px(60, 1920.0), 60);
        assert_eq!(Settings::scaled_px(60, 960.0), 30);
        assert_eq!(Settings::scaled_px(10, 100.0), 0);
    }
}
