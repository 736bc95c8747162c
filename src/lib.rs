//! Terminal client for two-player tic-tac-toe.
//!
//! The game rules live in [`noughts_core`]; this crate is the presentation
//! layer: configuration, the board view, and keyboard handling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod tui;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use tui::{App, digit_cell, move_cursor, run, status_text};
