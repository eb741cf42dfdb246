//! Battle-screen widgets for a turn-based monster game
//!
//! Monster sprites with health and action bars, hover and target
//! highlighting, and move slots, all drawn with SDL2 through the
//! [`paint::Painter`] seam.

pub mod assets;
pub mod battle;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod paint;
pub mod text;
pub mod ui;

pub use error::{ConfigError, UiError};
