// SPDX-License-Identifier: MIT

//! KMZ archive reading.
//!
//! A KMZ file is a zip container holding one KML document (plus, sometimes,
//! images referenced by it). We take the first entry whose name ends in
//! `.kml`, in archive directory order; which entry that is for multi-KML
//! containers depends on the producer and is deliberately not tie-broken.

use std::io::{Cursor, Read};

use crate::error::MapError;

/// Suffix identifying the embedded markup entry.
const KML_SUFFIX: &str = ".kml";

/// Extract the embedded KML document from raw KMZ bytes.
///
/// Fails with `NoEmbeddedPayload` when no entry name ends with `.kml`, and
/// with `Archive` when the container itself cannot be decoded.
pub fn extract(bytes: &[u8]) -> Result<String, MapError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| MapError::Archive(e.to_string()))?;

    let index = (0..archive.len())
        .find(|&i| {
            archive
                .by_index(i)
                .map(|entry| entry.name().ends_with(KML_SUFFIX))
                .unwrap_or(false)
        })
        .ok_or(MapError::NoEmbeddedPayload)?;

    let mut entry = archive
        .by_index(index)
        .map_err(|e| MapError::Archive(e.to_string()))?;
    let mut payload = String::new();
    entry
        .read_to_string(&mut payload)
        .map_err(|e| MapError::Archive(e.to_string()))?;

    tracing::debug!(entry = entry.name(), bytes = payload.len(), "Extracted KML from archive");
    Ok(payload)
}
