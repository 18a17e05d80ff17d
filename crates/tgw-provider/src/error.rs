//! Transcript retrieval error types.

use thiserror::Error;

pub type TranscriptResult<T> = Result<T, TranscriptError>;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript in the requested languages for video {0}")]
    NoTranscriptFound(String),

    #[error("Video is unavailable: {0}")]
    VideoUnavailable(String),

    #[error("YouTube is blocking requests from this IP: {0}")]
    IpBlocked(String),

    #[error("Invalid response from upstream: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TranscriptError {
    /// Captions exist in principle but none could be retrieved for
    /// this video.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TranscriptError::TranscriptsDisabled(_) | TranscriptError::NoTranscriptFound(_)
        )
    }

    /// The video itself cannot be played (deleted, private, region-locked).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TranscriptError::VideoUnavailable(_))
    }
}
