//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key events
//! into [`crate::types::GameAction`] and tracks held steering controls, including
//! on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_bowling_types as types;

pub use handler::InputHandler;
pub use map::{control_for, handle_key_event, should_quit};
