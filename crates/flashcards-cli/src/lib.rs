// Rust guideline compliant 2026-10-19

//! Flashcards CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod session;
pub mod terminal;

pub use session::{Action, Session, ACTIONS};
pub use terminal::{should_use_color, ConsolePrompter};
