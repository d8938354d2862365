// SPDX-License-Identifier: MIT

//! Three-tier content acquisition.
//!
//! Sources are tried in fixed order, strictly sequentially, each exactly
//! once per load:
//!
//! 1. local KMZ archive, decompressed;
//! 2. local flat KML file;
//! 3. remote endpoint, sniffing whether the bytes are raw markup or a
//!    compressed container.
//!
//! Any tier failure is logged and falls through to the next; only
//! exhaustion of all three surfaces `AllSourcesExhausted`.

use crate::config::Config;
use crate::error::MapError;
use crate::models::{AcquisitionResult, Provenance};
use crate::services::archive;
use crate::services::fetch::ByteSource;

/// Orchestrates the archive → flat-file → remote fallback chain.
pub struct ContentResolver<'a, S> {
    config: &'a Config,
    source: S,
}

impl<'a, S: ByteSource> ContentResolver<'a, S> {
    pub fn new(config: &'a Config, source: S) -> Self {
        Self { config, source }
    }

    /// Hand the byte source back once resolution is done.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Resolve one markup payload, trying each tier in order.
    pub async fn resolve(&self) -> Result<AcquisitionResult, MapError> {
        match self.try_local_archive().await {
            Ok(payload) => {
                return Ok(AcquisitionResult {
                    payload,
                    provenance: Provenance::LocalArchive,
                })
            }
            Err(e) => tracing::warn!(error = %e, "Local archive unavailable or incomplete"),
        }

        match self.try_local_fallback().await {
            Ok(payload) => {
                return Ok(AcquisitionResult {
                    payload,
                    provenance: Provenance::LocalFallbackFile,
                })
            }
            Err(e) => tracing::warn!(error = %e, "Local KML fallback unavailable"),
        }

        match self.try_remote().await {
            Ok(payload) => {
                return Ok(AcquisitionResult {
                    payload,
                    provenance: Provenance::RemoteEndpoint,
                })
            }
            Err(e) => tracing::warn!(error = %e, "Remote endpoint unavailable"),
        }

        Err(MapError::AllSourcesExhausted)
    }

    /// Tier 1: local KMZ archive.
    async fn try_local_archive(&self) -> Result<String, MapError> {
        let bytes = self.source.fetch(&self.config.archive_url).await?;
        let payload = archive::extract(&bytes)?;

        // Older exports embed only a NetworkLink pointing at the live map
        // instead of inline placemarks; such a payload is useless here.
        if is_network_link_only(&payload) {
            return Err(MapError::EmptyDataset);
        }
        Ok(payload)
    }

    /// Tier 2: local flat KML, no decompression.
    async fn try_local_fallback(&self) -> Result<String, MapError> {
        let bytes = self.source.fetch(&self.config.fallback_url).await?;
        String::from_utf8(bytes).map_err(|e| MapError::MalformedMarkup(e.to_string()))
    }

    /// Tier 3: remote endpoint; the response may be raw KML or a KMZ.
    async fn try_remote(&self) -> Result<String, MapError> {
        let bytes = self.source.fetch(&self.config.remote_url).await?;

        if looks_like_markup(&bytes) {
            String::from_utf8(bytes).map_err(|e| MapError::MalformedMarkup(e.to_string()))
        } else {
            tracing::debug!("Compressed response detected, extracting");
            archive::extract(&bytes)
        }
    }
}

/// True when the payload is a pointer-only reference: it carries a
/// `NetworkLink` indirection but zero inline place entries.
fn is_network_link_only(payload: &str) -> bool {
    payload.contains("<NetworkLink>") && !payload.contains("<Placemark>")
}

/// Sniff the first bytes for an XML/KML prologue.
fn looks_like_markup(bytes: &[u8]) -> bool {
    let preview_len = bytes.len().min(100);
    let preview = String::from_utf8_lossy(&bytes[..preview_len]);
    let trimmed = preview.trim_start();
    trimmed.starts_with("<?xml") || trimmed.starts_with("<kml")
}
