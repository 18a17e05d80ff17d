//! Transcript models.

use serde::{Deserialize, Serialize};

/// One timed caption fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSnippet {
    /// Display text of the fragment
    pub text: String,

    /// Offset from the start of the video, in seconds
    pub start: f64,

    /// Display duration, in seconds
    pub duration: f64,
}

/// A complete transcript for one video.
///
/// Snippets are in playback order; the order is caller-meaningful and
/// preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedTranscript {
    /// Video the transcript belongs to
    pub video_id: String,

    /// Language code of the caption track (e.g. "en")
    pub language_code: String,

    /// Whether the track was auto-generated rather than authored
    pub is_generated: bool,

    /// Caption fragments in playback order
    pub snippets: Vec<TranscriptSnippet>,
}

impl FetchedTranscript {
    /// Number of snippets in the transcript.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the transcript has no snippets at all.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Project the snippets down to their display text, preserving order.
    pub fn into_texts(self) -> Vec<String> {
        self.snippets.into_iter().map(|s| s.text).collect()
    }
}
