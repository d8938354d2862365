// SPDX-License-Identifier: MIT

//! Shared test fixtures: a counting byte-source stub, a recording map
//! engine, an in-memory flag store, and KML/KMZ builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::sync::Mutex;

use campus_map::error::MapError;
use campus_map::models::{Extent, MarkerLayer};
use campus_map::services::{ByteSource, FlagStore, MapEngine};
use geo::Point;
use zip::write::SimpleFileOptions;

/// What a stubbed URL returns.
pub enum StubResponse {
    Bytes(Vec<u8>),
    Status(u16),
    NetworkError,
}

/// Byte source with canned responses and per-URL call counts.
#[derive(Default)]
pub struct StubSource {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn with(mut self, url: &str, response: StubResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// How many times `url` was fetched.
    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl ByteSource for StubSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MapError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(StubResponse::Bytes(bytes)) => Ok(bytes.clone()),
            Some(StubResponse::Status(status)) => Err(MapError::HttpFailure(*status)),
            Some(StubResponse::NetworkError) | None => {
                Err(MapError::Fetch("connection refused".to_string()))
            }
        }
    }
}

/// Map engine that records every call.
#[derive(Default)]
pub struct MockEngine {
    pub layers: Vec<MarkerLayer>,
    pub fits: Vec<(Extent, f64, f64, u64)>,
    pub animations: Vec<(Point<f64>, f64, u64)>,
    pub set_views: Vec<(Point<f64>, f64)>,
    pub size_updates: usize,
    /// Pixel returned by `pixel_at`, when set.
    pub pixel: Option<(f64, f64)>,
}

impl MapEngine for MockEngine {
    fn add_layer(&mut self, layer: MarkerLayer) {
        self.layers.push(layer);
    }

    fn fit(&mut self, extent: Extent, padding: f64, max_zoom: f64, duration_ms: u64) {
        self.fits.push((extent, padding, max_zoom, duration_ms));
    }

    fn animate_to(&mut self, center: Point<f64>, zoom: f64, duration_ms: u64) {
        self.animations.push((center, zoom, duration_ms));
    }

    fn set_view(&mut self, center: Point<f64>, zoom: f64) {
        self.set_views.push((center, zoom));
    }

    fn pixel_at(&self, _coord: Point<f64>) -> Option<(f64, f64)> {
        self.pixel
    }

    fn update_size(&mut self) {
        self.size_updates += 1;
    }
}

/// In-memory persisted flags.
#[derive(Default)]
pub struct MemoryFlags {
    flags: HashMap<String, bool>,
}

impl FlagStore for MemoryFlags {
    fn get(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }
}

/// One placemark element.
pub fn placemark(name: &str, description: &str, lon: f64, lat: f64) -> String {
    format!(
        "<Placemark><name>{name}</name><description>{description}</description>\
         <Point><coordinates>{lon},{lat},0</coordinates></Point></Placemark>"
    )
}

/// A complete KML document wrapping `body`.
pub fn kml_document(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <kml xmlns=\"http://www.opengis.net/kml/2.2\"><Document>{body}</Document></kml>"
    )
}

/// A KML document holding only a NetworkLink indirection.
pub fn network_link_document() -> String {
    kml_document(
        "<NetworkLink><name>Carte</name>\
         <Link><href>https://example.invalid/live.kml</href></Link></NetworkLink>",
    )
}

/// Pack named entries into a KMZ (zip) container.
pub fn build_kmz(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A KMZ whose single entry is a three-place campus dataset.
pub fn campus_kml() -> String {
    kml_document(&format!(
        "{}{}{}",
        placemark("Bibliothèque universitaire", "La BU du campus", 55.4840, -20.9010),
        placemark("Amphi A", "<b>200</b> places", 55.4850, -20.9020),
        placemark("Parking P1", "", 55.4830, -20.9030),
    ))
}
