// SPDX-License-Identifier: MIT

//! Campus-Map: interactive map of the Université de Saint-Denis campus.
//!
//! This crate is the non-UI core: it acquires a KMZ/KML dataset through a
//! three-tier fallback chain, parses place markers, classifies them by
//! name, and drives a map engine plus a sortable side list.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use services::Presenter;

/// Shared application state: the fixed configuration and the presenter
/// that owns the current dataset and view.
pub struct AppState {
    pub config: Config,
    pub presenter: Presenter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            presenter: Presenter::new(),
        }
    }
}
