//! Browser glue: canvas surface, DOM listeners, error overlay

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    TouchEvent,
};

use crate::input::{InputEvent, TouchPoint};
use crate::render::{Color, Surface, serif_font};
use crate::scene::Game;

/// Canvas 2D implementation of [`Surface`]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the element size so text stays sharp
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::info!("Canvas resized to {width}x{height}");
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self, color: Color) {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_text_center(&mut self, text: &str, pos: Vec2, font_px: u32, color: Color) {
        self.ctx.set_font(&serif_font(font_px));
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_text_baseline("top");

        let width = self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
        let x = pos.x as f64 - (width / 2.0).floor();
        if let Err(e) = self.ctx.fill_text(text, x, pos.y as f64) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}

type Handler = Closure<dyn FnMut(web_sys::Event)>;

const KEY_EVENTS: &[&str] = &["keydown", "keyup"];
const CANVAS_EVENTS: &[&str] = &[
    "mousemove",
    "mousedown",
    "mouseup",
    "contextmenu",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
];

/// DOM listeners feeding a [`Game`]. Keys are read from the whole document
/// (the only reliable target); pointer and touch from the canvas.
pub struct DomListeners {
    registrations: Vec<(EventTarget, &'static str, Handler)>,
}

impl DomListeners {
    pub fn attach<S: Surface + 'static>(
        game: &Rc<RefCell<Game<S>>>,
        document: &Document,
        canvas: &HtmlCanvasElement,
    ) -> Self {
        let mut listeners = Self {
            registrations: Vec::new(),
        };
        for &name in KEY_EVENTS {
            listeners.listen(document.as_ref(), name, game, canvas);
        }
        for &name in CANVAS_EVENTS {
            listeners.listen(canvas.as_ref(), name, game, canvas);
        }
        log::info!("Attached {} input listeners", listeners.registrations.len());
        listeners
    }

    fn listen<S: Surface + 'static>(
        &mut self,
        target: &EventTarget,
        name: &'static str,
        game: &Rc<RefCell<Game<S>>>,
        canvas: &HtmlCanvasElement,
    ) {
        let game = game.clone();
        let canvas = canvas.clone();
        let handler = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(input) = translate(name, &event, &canvas) else {
                return;
            };
            let Ok(mut g) = game.try_borrow_mut() else {
                log::warn!("Dropped {name} event: game busy");
                return;
            };
            if g.handle_event(&input) {
                // Keep arrows/space from scrolling and touches from panning
                event.prevent_default();
                event.stop_propagation();
            }
        });
        match target.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref()) {
            Ok(()) => self.registrations.push((target.clone(), name, handler)),
            Err(e) => log::error!("Failed to listen for {name}: {e:?}"),
        }
    }

    /// Remove every listener. Safe to call more than once.
    pub fn detach(&mut self) {
        if self.registrations.is_empty() {
            return;
        }
        for (target, name, handler) in self.registrations.drain(..) {
            let _ = target
                .remove_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
        }
        log::info!("Input listeners detached");
    }
}

impl Drop for DomListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Convert a DOM event into an [`InputEvent`]
fn translate(name: &str, event: &web_sys::Event, canvas: &HtmlCanvasElement) -> Option<InputEvent> {
    match name {
        "keydown" | "keyup" => {
            let e = event.dyn_ref::<KeyboardEvent>()?;
            #[allow(deprecated)]
            let code = e.key_code();
            Some(if name == "keydown" {
                InputEvent::KeyDown(code)
            } else {
                InputEvent::KeyUp(code)
            })
        }
        "mousemove" => {
            let e = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::PointerMove(offset_pos(e)))
        }
        "mousedown" | "mouseup" => {
            let e = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::PointerButtons {
                pos: Some(offset_pos(e)),
                buttons: e.buttons(),
            })
        }
        "contextmenu" => Some(InputEvent::ContextMenu),
        "touchstart" | "touchmove" | "touchend" | "touchcancel" => {
            let e = event.dyn_ref::<TouchEvent>()?;
            let rect = canvas.get_bounding_client_rect();
            let list = e.touches();
            let points = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|t| {
                    let x = t.client_x() as f32 - rect.left() as f32;
                    let y = t.client_y() as f32 - rect.top() as f32;
                    TouchPoint::new(Vec2::new(x, y), t.identifier())
                })
                .collect();
            Some(InputEvent::Touches(points))
        }
        _ => None,
    }
}

fn offset_pos(e: &MouseEvent) -> Vec2 {
    Vec2::new(e.offset_x() as f32, e.offset_y() as f32)
}

/// Show a fatal error in the `#error` overlay (falls back to the console)
pub fn show_error(message: &str) {
    log::error!("{message}");
    let document = web_sys::window().and_then(|w| w.document());
    if let Some(el) = document.and_then(|d| d.get_element_by_id("error")) {
        el.set_text_content(Some(message));
        let _ = el.set_attribute("class", "");
    }
}
