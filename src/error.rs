// SPDX-License-Identifier: MIT

//! Application error taxonomy.
//!
//! Every variant is recoverable at the resolver/presentation boundary: the
//! resolver logs per-tier failures and falls through, and only
//! `AllSourcesExhausted` / `EmptyDataset` reach the top level, where they
//! trigger the default-map fallback rather than a crash.

/// Errors raised along the acquisition and parsing pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("no KML entry found in archive")]
    NoEmbeddedPayload,

    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    #[error("HTTP failure: status {0}")]
    HttpFailure(u16),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("all acquisition sources exhausted")]
    AllSourcesExhausted,

    #[error("dataset contains no places")]
    EmptyDataset,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, MapError>;
