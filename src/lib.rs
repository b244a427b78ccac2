//! Book Rain - falling book titles on a browser canvas
//!
//! Core modules:
//! - `input`: Keyboard/mouse/touch sources unified into virtual keys
//! - `entity`: Entity list that tolerates spawning mid-pass
//! - `timer`: Fixed-rate tick driver
//! - `scene`: The falling-titles content
//! - `render`: Drawing boundary (canvas 2D on the web)
//! - `platform`: Browser glue (wasm32 only)

pub mod entity;
pub mod geom;
pub mod input;
pub mod platform;
pub mod render;
pub mod scene;
pub mod settings;
pub mod timer;

pub use entity::{Entity, EntityList, PassSummary, Spawner};
pub use geom::{Rect, VecExt};
pub use input::{InputError, VKey, VirtualKeyInput};
pub use scene::Game;
pub use settings::{Settings, Theme};
pub use timer::{GameTimer, Stopwatch};
