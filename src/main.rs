// SPDX-License-Identifier: MIT

//! Campus-Map loader.
//!
//! Runs the acquisition pipeline once, the way the page does at load:
//! resolve a KML payload through the three-tier fallback chain, parse it,
//! and present the dataset (marker layer, fitted view, sorted list)
//! against a logging map engine.

use campus_map::{
    config::Config,
    error::MapError,
    models::{Extent, ListPanel, MarkerLayer},
    services::{ContentResolver, FlagStore, HttpByteSource, MapEngine, Presenter},
    AppState,
};
use geo::Point;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_logging();

    let config = Config::from_env();
    tracing::info!(
        archive = %config.archive_url,
        fallback = %config.fallback_url,
        "Starting Campus-Map loader"
    );

    let mut state = AppState::new(config);
    let mut engine = LoggingEngine::default();
    let flags = MemoryFlagStore::default();

    state.presenter.set_loading("Chargement des données...");
    let resolver = ContentResolver::new(&state.config, HttpByteSource::new());
    let loaded = match resolver.resolve().await {
        Ok(result) => {
            tracing::info!(source = result.provenance.label(), "Payload resolved");
            match campus_map::services::parser::parse(&result.payload) {
                Ok(records) if !records.is_empty() => Some((records, result.provenance)),
                Ok(_) => {
                    tracing::error!("Parsed dataset is empty");
                    None
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to parse payload");
                    None
                }
            }
        }
        Err(MapError::AllSourcesExhausted) => {
            tracing::error!("All acquisition sources exhausted");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Acquisition failed");
            None
        }
    };

    match loaded {
        Some((records, provenance)) => {
            state
                .presenter
                .load_complete(records, provenance, &mut engine);
        }
        None => state.presenter.load_failed(&mut engine),
    }

    report(&state.presenter, &flags);
}

/// Log the presented list and notifications.
fn report(presenter: &Presenter, _flags: &MemoryFlagStore) {
    match presenter.list_panel() {
        ListPanel::Entries(entries) => {
            for entry in entries {
                tracing::info!(name = %entry.name, color = entry.color, "Place");
            }
        }
        ListPanel::Error(message) => tracing::warn!(%message, "List panel in error state"),
        ListPanel::Loading(message) => tracing::warn!(%message, "List panel still loading"),
    }
    for notification in presenter.notifications() {
        tracing::info!(kind = ?notification.kind, message = %notification.message, "Toast");
    }
}

/// Map engine that logs what a widget would render.
#[derive(Default)]
struct LoggingEngine;

impl MapEngine for LoggingEngine {
    fn add_layer(&mut self, layer: MarkerLayer) {
        tracing::info!(title = %layer.title, markers = layer.markers.len(), "Layer added");
    }

    fn fit(&mut self, extent: Extent, padding: f64, max_zoom: f64, duration_ms: u64) {
        tracing::debug!(?extent, padding, max_zoom, duration_ms, "Fit view");
    }

    fn animate_to(&mut self, center: Point<f64>, zoom: f64, duration_ms: u64) {
        tracing::debug!(x = center.x(), y = center.y(), zoom, duration_ms, "Animate view");
    }

    fn set_view(&mut self, center: Point<f64>, zoom: f64) {
        tracing::debug!(x = center.x(), y = center.y(), zoom, "Set view");
    }

    fn pixel_at(&self, _coord: Point<f64>) -> Option<(f64, f64)> {
        None
    }

    fn update_size(&mut self) {}
}

/// In-memory flag store for the headless loader.
#[derive(Default)]
struct MemoryFlagStore {
    flags: std::collections::HashMap<String, bool>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }
}

/// Initialize tracing with an env-filter and compact formatting.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus_map=debug,info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
