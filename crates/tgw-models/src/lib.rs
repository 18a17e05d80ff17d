//! Shared data models for the transcript gateway.
//!
//! This crate provides Serde-serializable types for transcripts and
//! their timed caption fragments.

pub mod transcript;

// Re-export common types
pub use transcript::{FetchedTranscript, TranscriptSnippet};
