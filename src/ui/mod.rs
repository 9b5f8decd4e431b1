//! Full-screen terminal front end.
//!
//! The interpreter in [`crate::core`] owns all state; this layer draws the
//! session and turns key presses into calls on [`crate::core::app::App`].

pub mod event_loop;
pub mod lifecycle;
pub mod markup;
pub mod renderer;
pub mod theme;
