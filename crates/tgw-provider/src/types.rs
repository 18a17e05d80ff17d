//! Wire types for the innertube player API and json3 caption tracks.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayabilityStatus {
    pub status: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Captions {
    pub player_captions_tracklist_renderer: Option<CaptionsRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaptionsRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

/// One caption track offered for a video.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// "asr" marks auto-generated tracks
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Caption track payload in json3 format.
#[derive(Debug, Deserialize)]
pub(crate) struct Json3Transcript {
    #[serde(default)]
    pub events: Vec<Json3Event>,
}

/// One timed event in a json3 track.
///
/// Non-caption events (window styling, metadata) carry no `segs` and
/// are skipped during parsing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Json3Event {
    pub t_start_ms: Option<u64>,
    pub d_duration_ms: Option<u64>,
    pub segs: Option<Vec<Json3Segment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Json3Segment {
    pub utf8: Option<String>,
}
