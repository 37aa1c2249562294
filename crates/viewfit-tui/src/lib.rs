//! Terminal UI for viewfit
//!
//! A thin shell over [`viewfit_core::pipeline::SizePipeline`] that simulates
//! the hosting platform's inputs from key presses and draws the media
//! surface at whatever size the core resolves. All size decisions live in
//! the core; this crate only forwards events and renders.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod layout;
pub mod terminal;
pub mod ui;

pub use input::{InputCommand, TapRecognizer};
pub use layout::{LayoutPolicy, SurfaceVariant};
pub use terminal::{App, Cli, TerminalError, run};
