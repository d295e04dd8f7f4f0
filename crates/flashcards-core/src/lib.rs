// Rust guideline compliant 2026-10-19

//! Flashcards Core Library
//!
//! This crate provides the engine behind the flashcards quiz tool:
//! - Data model (Card, error counters)
//! - CardStore (uniqueness-checked insert, removal, hardest-card query)
//! - Quiz engine with swapped-answer detection
//! - Line-oriented card file storage (`term, definition, errors`)
//! - Transcript sink and prompt/notice plumbing for interactive use
//! - Configuration and error types

pub mod config;
pub mod dialogue;
pub mod error;
pub mod messages;
pub mod models;
pub mod quiz;
pub mod storage;
pub mod store;
pub mod transcript;

pub use config::Config;
pub use dialogue::{Dialogue, Prompter, ScriptedPrompter};
pub use error::{Error, Result};
pub use messages::{Notice, Prompt};
pub use models::Card;
pub use quiz::{Grade, QuizAnswer, QuizSummary};
pub use storage::CardFile;
pub use store::{CardStore, Hardest, ImportOutcome, Removal};
pub use transcript::{Transcript, TranscriptSink};
