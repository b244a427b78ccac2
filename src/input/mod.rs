//! Input: raw sources and the virtual key layer
//!
//! - `keyboard`, `pointer`, `touch`: passive accumulators fed by platform events
//! - `direction`: heading classification for virtual sticks
//! - `compose`: mappings from raw sources to virtual keys
//! - `virtual_key`: double-buffered virtual key state with edge queries

pub mod compose;
pub mod direction;
pub mod event;
pub mod keyboard;
pub mod pointer;
pub mod touch;
pub mod virtual_key;

pub use compose::{Composition, InputSources, OneKey, SixKeys, TwoDirections};
pub use direction::{Directions, EIGHT_WAY, FOUR_WAY, NEUTRAL_RADIUS, classify};
pub use event::{InputEvent, InputSource, TouchPoint};
pub use keyboard::{KeyInput, key};
pub use pointer::{PointerInput, PointerState};
pub use touch::TouchInput;
pub use virtual_key::{InputError, KeyFrame, MAX_VKEYS, VKey, VirtualKeyInput};
