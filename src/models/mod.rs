// SPDX-License-Identifier: MIT

//! Data models.

pub mod geometry;
pub mod place;
pub mod view;

pub use geometry::{project_lon_lat, Extent};
pub use place::{AcquisitionResult, PlaceRecord, Provenance};
pub use view::{
    Category, ListEntry, ListPanel, Marker, MarkerLayer, MarkerStyle, Notification,
    NotificationKind, Popup, ViewState,
};
