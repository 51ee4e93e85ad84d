//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay. It
//! avoids widget/layout libraries and renders into a simple framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! - [`fb`]: styled cells plus a world-space [`Canvas`] (circles and lines)
//! - [`game_view`]: lane and pin-game views drawn from core snapshots
//! - [`renderer`]: diffing terminal flusher
//! - [`pacer`]: fixed-rate tick clock

pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Canvas, Cell, CellRect, CellStyle, FrameBuffer, Rgb};
pub use game_view::{LaneView, Layout, PinView, Viewport};
pub use pacer::TickPacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
