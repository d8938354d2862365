// SPDX-License-Identifier: MIT

//! View-side models: categories, view state, markers, list entries,
//! popups and notifications.

use geo::Point;
use serde::Serialize;

use crate::config;

/// Closed set of place categories, each bound to a display color.
///
/// Derived from the place name on demand (see `services::classify`), never
/// stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Building,
    Green,
    Restaurant,
    Parking,
    Service,
    Default,
}

impl Category {
    /// Display color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Building => "#3b82f6",
            Category::Green => "#22c55e",
            Category::Restaurant => "#ef4444",
            Category::Parking => "#f97316",
            Category::Service => "#a855f7",
            Category::Default => "#6b7280",
        }
    }
}

/// Current map view: center, zoom, and the selected record, if any.
///
/// Single instance owned by the presenter; mutated only at load-complete,
/// select, and pan/zoom.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub center: Point<f64>,
    pub zoom: f64,
    pub selected: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        let (lon, lat) = config::INITIAL_CENTER;
        Self {
            center: crate::models::geometry::project_lon_lat(lon, lat),
            zoom: config::INITIAL_ZOOM,
            selected: None,
        }
    }
}

/// Style for one marker disc plus its centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: &'static str,
    pub outline: &'static str,
    pub outline_width: f64,
    pub label: String,
    pub label_offset_y: f64,
    pub label_halo_width: f64,
}

/// One renderable marker.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Index of the backing `PlaceRecord`.
    pub record_id: usize,
    pub position: Point<f64>,
    pub style: MarkerStyle,
}

/// A group of markers rendered as one map layer.
#[derive(Debug, Clone)]
pub struct MarkerLayer {
    pub title: String,
    pub markers: Vec<Marker>,
}

/// One entry of the sorted side list.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    /// Index of the backing `PlaceRecord`.
    pub record_id: usize,
    pub name: String,
    pub color: &'static str,
    /// Tag-stripped description preview, empty when absent.
    pub preview: String,
    pub active: bool,
}

/// Contents of the side panel.
#[derive(Debug, Clone, Serialize)]
pub enum ListPanel {
    Loading(String),
    Entries(Vec<ListEntry>),
    Error(String),
}

/// The single popup, anchored to a marker's projected screen position.
#[derive(Debug, Clone)]
pub struct Popup {
    pub record_id: usize,
    pub title: String,
    /// Raw description markup shown in the popup body, if any.
    pub body: Option<String>,
    /// Screen anchor, when the engine can project the coordinate.
    pub pixel: Option<(f64, f64)>,
}

/// Toast notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient toast.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub ttl_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            ttl_ms: config::NOTIFICATION_TTL_MS,
        }
    }
}
