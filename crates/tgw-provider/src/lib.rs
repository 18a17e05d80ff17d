//! YouTube transcript retrieval.
//!
//! This crate resolves a video id to its caption transcript via YouTube's
//! innertube player API, optionally routing all traffic through a rotating
//! residential proxy authenticated with static credentials.
//!
//! The [`TranscriptProvider`] trait is the seam consumers depend on;
//! [`TranscriptClient`] is the production implementation.

pub mod client;
pub mod config;
pub mod error;
mod types;

pub use client::{TranscriptClient, TranscriptProvider};
pub use config::{ProviderConfig, ProxyCredentials};
pub use error::{TranscriptError, TranscriptResult};
