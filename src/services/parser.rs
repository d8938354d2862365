// SPDX-License-Identifier: MIT

//! KML placemark decoding.
//!
//! Streams the markup once and collects `<Placemark>` name, description and
//! the first `<Point>` coordinate tuple, reprojected from EPSG:4326 to
//! display coordinates. Placemarks without a parseable point are dropped;
//! record order is document order.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::MapError;
use crate::models::{project_lon_lat, PlaceRecord};

/// Text-bearing elements we capture inside a placemark.
#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Description,
    Coordinates,
}

#[derive(Default)]
struct PlacemarkBuilder {
    name: Option<String>,
    description: Option<String>,
    coordinates: Option<(f64, f64)>,
}

/// Parse a KML payload into place records.
///
/// Fails with `MalformedMarkup` when the markup itself cannot be read; a
/// well-formed document with no usable placemarks yields an empty vector,
/// which the caller treats as `EmptyDataset`.
pub fn parse(payload: &str) -> Result<Vec<PlaceRecord>, MapError> {
    let mut reader = Reader::from_str(payload);

    let mut records = Vec::new();
    let mut current: Option<PlacemarkBuilder> = None;
    let mut field: Option<Field> = None;
    let mut in_point = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| MapError::MalformedMarkup(e.to_string()))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Placemark" => current = Some(PlacemarkBuilder::default()),
                b"Point" if current.is_some() => in_point = true,
                b"name" if current.is_some() => field = Some(Field::Name),
                b"description" if current.is_some() => field = Some(Field::Description),
                b"coordinates" if in_point => field = Some(Field::Coordinates),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"Placemark" => {
                    if let Some(builder) = current.take() {
                        if let Some((lon, lat)) = builder.coordinates {
                            records.push(PlaceRecord {
                                id: records.len(),
                                name: builder.name,
                                description: builder.description,
                                geometry: project_lon_lat(lon, lat),
                            });
                        }
                    }
                }
                b"Point" => in_point = false,
                b"name" | b"description" | b"coordinates" => field = None,
                _ => {}
            },
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| MapError::MalformedMarkup(e.to_string()))?;
                store_field(&mut current, field, &text);
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                store_field(&mut current, field, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    tracing::info!(count = records.len(), "Parsed place records");
    Ok(records)
}

/// Record a text chunk into the builder field currently open.
fn store_field(current: &mut Option<PlacemarkBuilder>, field: Option<Field>, text: &str) {
    let Some(builder) = current.as_mut() else {
        return;
    };
    match field {
        Some(Field::Name) => append(&mut builder.name, text),
        Some(Field::Description) => append(&mut builder.description, text),
        Some(Field::Coordinates) => {
            // Keep the first tuple of the first Point only.
            if builder.coordinates.is_none() {
                builder.coordinates = parse_coordinates(text);
            }
        }
        None => {}
    }
}

fn append(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => existing.push_str(text),
        None => *slot = Some(text.to_string()),
    }
}

/// Parse the leading "lon,lat[,alt]" tuple of a KML coordinates string.
fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let tuple = text.split_whitespace().next()?;
    let mut parts = tuple.split(',');
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    Some((lon, lat))
}
