//! Falling book titles
//!
//! The root entity list holds a single [`BookSpawner`]; it shows an opening
//! quote and then keeps appending [`Book`]s that fall until they leave the
//! canvas. SPACE (or any click/tap) swaps text and background colours.

pub mod book;
pub mod quotes;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod titles;

pub use book::Book;
pub use quotes::{QUOTES, Quote};
pub use spawner::BookSpawner;
pub use state::Stage;
pub use tick::Game;
pub use titles::{DEFAULT_TITLES, default_titles};
