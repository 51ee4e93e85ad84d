//! Terminal bowling (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_bowling::{core,input,term,types}` and holds the glue
//! shared by the binaries:
//!
//! - [`cli`]: command-line options, logging setup and config loading
//! - [`app`]: the full-screen loop driving the lane and pin games

pub mod app;
pub mod cli;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
