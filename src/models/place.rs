// SPDX-License-Identifier: MIT

//! Place records and acquisition results.

use geo::Point;
use serde::Serialize;

/// Display name used when a placemark carries no name.
pub const UNNAMED_PLACE: &str = "Lieu sans nom";

/// One positioned point of interest, immutable once parsed.
///
/// Records are owned by the presenter for the lifetime of one loaded
/// dataset and replaced wholesale when a new dataset loads.
#[derive(Debug, Clone)]
pub struct PlaceRecord {
    /// Document-order index within the parsed dataset.
    pub id: usize,
    /// Placemark name, if any.
    pub name: Option<String>,
    /// Raw description markup, if any.
    pub description: Option<String>,
    /// Position in display (EPSG:3857) coordinates.
    pub geometry: Point<f64>,
}

impl PlaceRecord {
    /// Name for display, defaulting for unnamed placemarks.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(UNNAMED_PLACE)
    }
}

/// Which acquisition tier produced the final payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    LocalArchive,
    LocalFallbackFile,
    RemoteEndpoint,
}

impl Provenance {
    /// Human-readable source label for notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::LocalArchive => "fichier KMZ local",
            Provenance::LocalFallbackFile => "données locales (KML)",
            Provenance::RemoteEndpoint => "Google Maps",
        }
    }
}

/// A resolved markup payload plus where it came from. Consumed once by the
/// parser.
#[derive(Debug, Clone)]
pub struct AcquisitionResult {
    pub payload: String,
    pub provenance: Provenance,
}
