//! Transcript request handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use tgw_provider::TranscriptError;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Transcript query params.
#[derive(Deserialize)]
pub struct TranscriptQuery {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Transcript response body.
#[derive(Serialize)]
pub struct TranscriptResponse {
    /// Snippet texts in playback order
    pub transcript: Vec<String>,
}

/// Fetch a video transcript as a flat list of snippet texts.
///
/// The video id is opaque to the server; no format validation is done
/// here. One provider call per request, no retries.
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> ApiResult<Json<TranscriptResponse>> {
    let video_id = query
        .video_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingVideoId)?;

    let provider = state.provider.as_ref().ok_or(ApiError::ProxyNotConfigured)?;

    let transcript = match provider.fetch(video_id).await {
        Ok(transcript) => {
            metrics::record_transcript_fetch("ok");
            transcript
        }
        Err(err) => {
            metrics::record_transcript_fetch(fetch_outcome(&err));
            return Err(err.into());
        }
    };

    info!(
        video_id = %video_id,
        snippet_count = transcript.len(),
        "Transcript fetched"
    );

    Ok(Json(TranscriptResponse {
        transcript: transcript.into_texts(),
    }))
}

fn fetch_outcome(err: &TranscriptError) -> &'static str {
    if err.is_not_found() {
        "not_found"
    } else if err.is_unavailable() {
        "unavailable"
    } else {
        "error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_outcome_labels() {
        assert_eq!(
            fetch_outcome(&TranscriptError::TranscriptsDisabled("abc".into())),
            "not_found"
        );
        assert_eq!(
            fetch_outcome(&TranscriptError::VideoUnavailable("abc".into())),
            "unavailable"
        );
        assert_eq!(
            fetch_outcome(&TranscriptError::IpBlocked("bot check".into())),
            "error"
        );
    }
}
