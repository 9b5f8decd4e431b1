//! Termfolio is a terminal-styled portfolio shell.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns portfolio content, session state, persistence, and the
//!   [`core::app::App`] that applies command effects through host
//!   capabilities.
//! - [`commands`] parses input lines and runs the registered commands. Every
//!   handler is a pure function from content to output lines plus an optional
//!   effect.
//! - [`ui`] renders the scrollback and prompt and runs the interactive event
//!   loop.
//! - [`utils`] holds host capability implementations and small helpers.
//!
//! The binary routes through [`crate::cli::main`], which builds an `App` from
//! configuration and dispatches to [`ui::event_loop`] or a one-shot mode.

pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
