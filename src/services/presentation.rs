// SPDX-License-Identifier: MIT

//! Presentation layer: marker building, viewport fitting, the sorted side
//! list, and popup/selection state.
//!
//! The presenter owns the loaded dataset and the single `ViewState`; all
//! input (list click, marker click, dismiss, resize) arrives as a
//! `Command` consumed by one `update` function. Map-widget internals stay
//! behind the `MapEngine` trait, and the persisted dismiss flag behind
//! `FlagStore`.

use std::sync::OnceLock;

use geo::Point;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config;
use crate::models::{
    Extent, ListEntry, ListPanel, Marker, MarkerLayer, MarkerStyle, Notification,
    NotificationKind, PlaceRecord, Popup, Provenance, ViewState,
};
use crate::services::classify::classify;

/// Map-widget capability: everything the presenter needs from the
/// rendering engine, and nothing more.
pub trait MapEngine {
    /// Render a layer of point markers.
    fn add_layer(&mut self, layer: MarkerLayer);
    /// Animate the viewport to contain `extent`.
    fn fit(&mut self, extent: Extent, padding: f64, max_zoom: f64, duration_ms: u64);
    /// Animate the viewport to a center and zoom.
    fn animate_to(&mut self, center: Point<f64>, zoom: f64, duration_ms: u64);
    /// Jump the viewport without animation.
    fn set_view(&mut self, center: Point<f64>, zoom: f64);
    /// Project a display coordinate to a screen pixel, if visible.
    fn pixel_at(&self, coord: Point<f64>) -> Option<(f64, f64)>;
    /// Recompute the widget size after a viewport change.
    fn update_size(&mut self);
}

/// Persisted boolean flags (the orientation-warning dismissal survives
/// sessions).
pub trait FlagStore {
    fn get(&self, key: &str) -> bool;
    fn set(&mut self, key: &str, value: bool);
}

/// User input, normalized to explicit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a place by record id (list click and marker click both land
    /// here).
    Select(usize),
    /// A raw map click with its hit-test result; a miss closes the popup.
    MapClick(Option<usize>),
    /// Dismiss the orientation warning, persistently.
    Dismiss,
    /// Viewport resized; applied after the debounce quiet period.
    Resize { width: u32, height: u32, at_ms: u64 },
}

/// Application state for one map session.
pub struct Presenter {
    records: Vec<PlaceRecord>,
    provenance: Option<Provenance>,
    view: ViewState,
    list: ListPanel,
    popup: Option<Popup>,
    notifications: Vec<Notification>,
    orientation_warning_visible: bool,
    pending_resize: Option<(u32, u32, u64)>,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            provenance: None,
            view: ViewState::default(),
            list: ListPanel::Loading("Chargement des données...".to_string()),
            popup: None,
            notifications: Vec::new(),
            orientation_warning_visible: false,
            pending_resize: None,
        }
    }

    /// Show a progress message in the list panel while a tier loads.
    pub fn set_loading(&mut self, message: impl Into<String>) {
        self.list = ListPanel::Loading(message.into());
    }

    /// Install a freshly loaded dataset: build the marker layer, fit the
    /// viewport, rebuild the sorted list, and announce success.
    pub fn load_complete<E: MapEngine>(
        &mut self,
        records: Vec<PlaceRecord>,
        provenance: Provenance,
        engine: &mut E,
    ) {
        if records.is_empty() {
            self.load_failed(engine);
            return;
        }

        let markers: Vec<Marker> = records.iter().map(build_marker).collect();
        let extent = Extent::of_points(markers.iter().map(|m| m.position))
            .unwrap_or_else(|| Extent::of_point(self.view.center));

        engine.add_layer(MarkerLayer {
            title: "Lieux importants".to_string(),
            markers,
        });
        engine.fit(
            extent,
            config::FIT_PADDING,
            config::FIT_MAX_ZOOM,
            config::FIT_DURATION_MS,
        );

        self.view.center = extent.center();
        self.view.selected = None;
        self.popup = None;

        let count = records.len();
        self.records = records;
        self.provenance = Some(provenance);
        self.rebuild_list();
        self.notifications.push(Notification::new(
            format!("{count} lieux chargés depuis {}", provenance.label()),
            NotificationKind::Success,
        ));
        tracing::info!(count, source = provenance.label(), "Dataset presented");
    }

    /// Total acquisition failure: default view, synthetic campus marker,
    /// error panel and toast. Never a crash.
    pub fn load_failed<E: MapEngine>(&mut self, engine: &mut E) {
        let (lon, lat) = config::DEFAULT_CENTER;
        let center = crate::models::project_lon_lat(lon, lat);

        engine.set_view(center, config::DEFAULT_ZOOM);
        engine.add_layer(MarkerLayer {
            title: "Position par défaut".to_string(),
            markers: vec![build_marker(&PlaceRecord {
                id: 0,
                name: Some(config::DEFAULT_PLACE_NAME.to_string()),
                description: None,
                geometry: center,
            })],
        });

        self.records.clear();
        self.provenance = None;
        self.view.center = center;
        self.view.zoom = config::DEFAULT_ZOOM;
        self.view.selected = None;
        self.popup = None;
        self.list = ListPanel::Error(
            "Impossible de charger les données. Affichage de la position par défaut."
                .to_string(),
        );
        self.notifications.push(Notification::new(
            "Erreur de chargement des données",
            NotificationKind::Error,
        ));
    }

    /// Single state-update entry point for all user input.
    pub fn update<E: MapEngine, F: FlagStore>(
        &mut self,
        command: Command,
        engine: &mut E,
        flags: &mut F,
    ) {
        match command {
            Command::Select(id) | Command::MapClick(Some(id)) => self.select(id, engine),
            Command::MapClick(None) => self.popup = None,
            Command::Dismiss => {
                self.orientation_warning_visible = false;
                flags.set(config::DISMISS_FLAG_KEY, true);
            }
            Command::Resize {
                width,
                height,
                at_ms,
            } => self.pending_resize = Some((width, height, at_ms)),
        }
    }

    /// Apply a pending resize once the debounce quiet period has elapsed.
    pub fn tick<E: MapEngine, F: FlagStore>(&mut self, now_ms: u64, engine: &mut E, flags: &F) {
        let Some((width, height, at_ms)) = self.pending_resize else {
            return;
        };
        if now_ms.saturating_sub(at_ms) < config::RESIZE_DEBOUNCE_MS {
            return;
        }
        self.pending_resize = None;
        self.orientation_warning_visible =
            needs_orientation_warning(width, height) && !flags.get(config::DISMISS_FLAG_KEY);
        engine.update_size();
        self.reposition_popup(engine);
    }

    /// Select-and-show-popup: animate to the place, highlight its list
    /// entry, and replace any open popup.
    fn select<E: MapEngine>(&mut self, id: usize, engine: &mut E) {
        let Some(record) = self.records.iter().find(|r| r.id == id) else {
            tracing::warn!(id, "Selection for unknown record ignored");
            return;
        };
        let position = record.geometry;
        let title = record.display_name().to_string();
        let body = record.description.clone();

        engine.animate_to(position, config::SELECT_ZOOM, config::SELECT_DURATION_MS);
        self.view.center = position;
        self.view.zoom = config::SELECT_ZOOM;
        self.view.selected = Some(id);

        self.popup = Some(Popup {
            record_id: id,
            title,
            body,
            pixel: anchor_pixel(engine, position),
        });
        self.rebuild_list();
    }

    /// Re-anchor the popup after the view moved.
    fn reposition_popup<E: MapEngine>(&mut self, engine: &E) {
        if let Some(popup) = self.popup.as_mut() {
            if let Some(record) = self.records.iter().find(|r| r.id == popup.record_id) {
                popup.pixel = anchor_pixel(engine, record.geometry);
            }
        }
    }

    fn rebuild_list(&mut self) {
        let mut entries: Vec<ListEntry> = self
            .records
            .iter()
            .map(|record| {
                let name = record.display_name().to_string();
                ListEntry {
                    record_id: record.id,
                    color: classify(&name).color(),
                    preview: description_preview(record.description.as_deref().unwrap_or("")),
                    active: self.view.selected == Some(record.id),
                    name,
                }
            })
            .collect();
        entries.sort_by_key(|entry| sort_key(&entry.name));
        self.list = ListPanel::Entries(entries);
    }

    // --- accessors ---

    pub fn list_panel(&self) -> &ListPanel {
        &self.list
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn provenance(&self) -> Option<Provenance> {
        self.provenance
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn orientation_warning_visible(&self) -> bool {
        self.orientation_warning_visible
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }
}

/// Marker style for one record: colored disc, white outline, name label.
fn build_marker(record: &PlaceRecord) -> Marker {
    let name = record.name.clone().unwrap_or_default();
    Marker {
        record_id: record.id,
        position: record.geometry,
        style: MarkerStyle {
            radius: config::MARKER_RADIUS,
            fill: classify(&name).color(),
            outline: "#ffffff",
            outline_width: config::MARKER_OUTLINE_WIDTH,
            label: name,
            label_offset_y: config::LABEL_OFFSET_Y,
            label_halo_width: config::LABEL_HALO_WIDTH,
        },
    }
}

/// Popup screen anchor: the marker pixel, shifted up.
fn anchor_pixel<E: MapEngine>(engine: &E, coord: Point<f64>) -> Option<(f64, f64)> {
    engine
        .pixel_at(coord)
        .map(|(x, y)| (x, y + config::POPUP_OFFSET_Y))
}

/// Portrait on a narrow viewport.
fn needs_orientation_warning(width: u32, height: u32) -> bool {
    width < height && width < config::ORIENTATION_WARNING_MAX_WIDTH
}

/// Accent- and case-insensitive sort key (the list equivalent of
/// locale-aware comparison: "éléphant" orders with the e's, not after z).
fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tag-stripped, truncated description preview for the side list.
fn description_preview(description: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());

    let text = tag.replace_all(description, "");
    let truncated: String = text.chars().take(config::PREVIEW_LEN).collect();
    if text.chars().count() >= config::PREVIEW_LEN {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_folds_accents_and_case() {
        assert_eq!(sort_key("Éléphant"), "elephant");
        assert!(sort_key("éléphant") < sort_key("Zebra"));
    }

    #[test]
    fn test_description_preview_strips_tags() {
        assert_eq!(
            description_preview("<b>Ouvert</b> de 8h à <i>18h</i>"),
            "Ouvert de 8h à 18h"
        );
    }

    #[test]
    fn test_description_preview_truncates() {
        let long = "x".repeat(80);
        let preview = description_preview(&long);
        assert_eq!(preview.chars().count(), 63);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_description_preview_short_untouched() {
        assert_eq!(description_preview("courte"), "courte");
    }

    #[test]
    fn test_orientation_predicate() {
        assert!(needs_orientation_warning(400, 800));
        assert!(!needs_orientation_warning(800, 400));
        assert!(!needs_orientation_warning(900, 1200));
    }
}
