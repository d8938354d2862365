// SPDX-License-Identifier: MIT

//! Display-coordinate projection and extents.
//!
//! Source data is geographic (EPSG:4326 lon/lat); everything downstream of
//! the parser works in Web Mercator display coordinates (EPSG:3857), the
//! projection the map engine renders in.

use geo::Point;

/// Earth radius used by the spherical Mercator projection, in meters.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limits of Web Mercator; the projection diverges beyond these.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Project a geographic (lon, lat) coordinate to EPSG:3857.
pub fn project_lon_lat(lon: f64, lat: f64) -> Point<f64> {
    let clamped = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((std::f64::consts::FRAC_PI_4 + clamped.to_radians() / 2.0).tan()).ln();
    Point::new(x, y)
}

/// Axis-aligned bounding box in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Extent of a single point.
    pub fn of_point(p: Point<f64>) -> Self {
        Self {
            min_x: p.x(),
            min_y: p.y(),
            max_x: p.x(),
            max_y: p.y(),
        }
    }

    /// Grow to include another point.
    pub fn expand(&mut self, p: Point<f64>) {
        self.min_x = self.min_x.min(p.x());
        self.min_y = self.min_y.min(p.y());
        self.max_x = self.max_x.max(p.x());
        self.max_y = self.max_y.max(p.y());
    }

    /// Bounding extent of a non-empty point sequence.
    pub fn of_points<I: IntoIterator<Item = Point<f64>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut extent = Self::of_point(iter.next()?);
        for p in iter {
            extent.expand(p);
        }
        Some(extent)
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
