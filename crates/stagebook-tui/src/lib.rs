//! Terminal UI for Stagebook
//!
//! A thin shell over [`stagebook_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic
//! [`stagebook_app::Runtime`].
//!
//! This crate handles terminal input, rendering and the binary's
//! configuration.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use cli::Args;
pub use terminal::{TerminalDriver, TerminalError};
