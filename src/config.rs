// SPDX-License-Identifier: MIT

//! Map configuration.
//!
//! Everything here is fixed at startup. The three source locations can be
//! overridden from the environment (useful when the data files are served
//! from somewhere other than the app root); all other values are the
//! constants the map was designed around and are not runtime-editable.

use std::env;

/// Initial view center (lon, lat) — the Saint-Denis campus.
pub const INITIAL_CENTER: (f64, f64) = (55.4835, -20.902);
/// Initial zoom level.
pub const INITIAL_ZOOM: f64 = 17.0;

/// Fallback view used when no data source could be loaded.
pub const DEFAULT_CENTER: (f64, f64) = (55.4515, -20.9015);
pub const DEFAULT_ZOOM: f64 = 16.0;
/// Label on the synthetic fallback marker.
pub const DEFAULT_PLACE_NAME: &str = "Université de Saint-Denis";

/// Marker disc radius in pixels.
pub const MARKER_RADIUS: f64 = 12.0;
/// Marker outline width in pixels.
pub const MARKER_OUTLINE_WIDTH: f64 = 3.0;
/// Label vertical offset above the disc.
pub const LABEL_OFFSET_Y: f64 = -25.0;
/// Label halo width.
pub const LABEL_HALO_WIDTH: f64 = 4.0;

/// Padding (pixels, all four sides) when fitting the view to the dataset.
pub const FIT_PADDING: f64 = 100.0;
/// Zoom cap for the fit-to-data operation.
pub const FIT_MAX_ZOOM: f64 = 18.0;
/// Fit animation duration in milliseconds.
pub const FIT_DURATION_MS: u64 = 1000;

/// Target zoom when a place is selected.
pub const SELECT_ZOOM: f64 = 19.0;
/// Selection animation duration in milliseconds.
pub const SELECT_DURATION_MS: u64 = 600;

/// Vertical popup anchor offset from the marker's projected pixel.
pub const POPUP_OFFSET_Y: f64 = -20.0;

/// Description preview length in the side list.
pub const PREVIEW_LEN: usize = 60;

/// Toast lifetime in milliseconds.
pub const NOTIFICATION_TTL_MS: u64 = 3000;

/// Persisted-flag key for the orientation warning dismissal.
pub const DISMISS_FLAG_KEY: &str = "orientationWarningDismissed";
/// Viewport width below which the portrait-orientation warning applies.
pub const ORIENTATION_WARNING_MAX_WIDTH: u32 = 768;

/// Quiet period for resize/orientation recomputation.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local compressed archive (KMZ) location — acquisition tier 1.
    pub archive_url: String,
    /// Local flat KML location — acquisition tier 2.
    pub fallback_url: String,
    /// Remote endpoint (Google My Maps export) — acquisition tier 3.
    pub remote_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_url: "Carte de fac lieux important.kmz".to_string(),
            fallback_url: "data.kml".to_string(),
            remote_url:
                "https://www.google.com/maps/d/kml?mid=1efHg3DJrBuE2uBpgKnpTDEJZACIPw89X"
                    .to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default, so this never fails; a `.env` file is
    /// honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            archive_url: env::var("MAP_ARCHIVE_URL").unwrap_or(defaults.archive_url),
            fallback_url: env::var("MAP_FALLBACK_URL").unwrap_or(defaults.fallback_url),
            remote_url: env::var("MAP_REMOTE_URL").unwrap_or(defaults.remote_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_env_override() {
        env::set_var("MAP_ARCHIVE_URL", "campus.kmz");
        env::remove_var("MAP_FALLBACK_URL");

        let config = Config::from_env();

        assert_eq!(config.archive_url, "campus.kmz");
        assert_eq!(config.fallback_url, "data.kml");
        env::remove_var("MAP_ARCHIVE_URL");
    }
}
