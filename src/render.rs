//! Drawing boundary
//!
//! Scene code only needs to clear the screen and draw centred text. The web
//! build implements [`Surface`] over a canvas 2D context; native runs and
//! tests use [`RecordingSurface`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex string, e.g. `#808080`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS font shorthand for a serif face
pub fn serif_font(px: u32) -> String {
    format!("{px}px serif")
}

/// Something titles can be drawn on
pub trait Surface {
    /// Drawable size in CSS pixels
    fn size(&self) -> Vec2;

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Draw `text` horizontally centred on `pos.x`, top edge at `pos.y`
    fn draw_text_center(&mut self, text: &str, pos: Vec2, font_px: u32, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Text {
        text: String,
        pos: Vec2,
        font_px: u32,
        color: Color,
    },
}

/// Surface that only records what was drawn
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain everything recorded so far
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Text of every text call, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_text_center(&mut self, text: &str, pos: Vec2, font_px: u32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            pos,
            font_px,
            color,
        });
    }
}
