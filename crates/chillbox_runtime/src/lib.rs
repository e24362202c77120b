//! Settings, logging, console REPL and CLI for Chillbox.
//!
//! This crate provides:
//! - [`Settings`] - Layered configuration (TOML file, then `CHILLBOX_*` environment)
//! - [`logging`] - `tracing` subscriber setup
//! - [`Repl`] - Interactive console standing in for the microphone and speaker
//! - [`console`] - Console feedback and display collaborators
//! - [`app`] - Wiring a controller from settings, batch processing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod app;
pub mod console;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod settings;

pub use app::{BatchSummary, open_controller, run_batch};
pub use console::{ConsoleDisplay, ConsoleFeedback};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use settings::Settings;
