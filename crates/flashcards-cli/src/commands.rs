// Rust guideline compliant 2026-10-19

//! Command implementations for the flashcards session.

pub mod cards;
pub mod files;
pub mod study;
