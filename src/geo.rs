//! Geometry collaborators: projection into grid space and geodesic distance.
//!
//! The accumulator only relies on the [`Projector`] and [`GeodesicDistance`]
//! traits. [`BoundingBoxProjector`] and [`Haversine`] are simple stand-ins
//! used by the command-line tool; deployments with a rotated or warped grid
//! plug in their own projector.

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// A position in normalized grid space. The modeled region is `[0, 1]²`;
/// points outside it are still representable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` when both coordinates lie in the closed unit interval.
    pub fn is_inside(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Maps a longitude/latitude pair into normalized grid space.
pub trait Projector {
    fn project(&self, lon: f64, lat: f64) -> Result<GridPoint, ProjectionError>;
}

/// Distance in meters between two `(lat, lon)` pairs.
pub trait GeodesicDistance {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

/// Axis-aligned lon/lat box mapped linearly onto the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxProjector {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Default for BoundingBoxProjector {
    /// Roughly lower and midtown Manhattan.
    fn default() -> Self {
        Self {
            min_lon: -74.02,
            min_lat: 40.70,
            max_lon: -73.93,
            max_lat: 40.88,
        }
    }
}

impl Projector for BoundingBoxProjector {
    fn project(&self, lon: f64, lat: f64) -> Result<GridPoint, ProjectionError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ProjectionError {
                lon,
                lat,
                reason: "non-finite coordinate".into(),
            });
        }
        let width = self.max_lon - self.min_lon;
        let height = self.max_lat - self.min_lat;
        if width <= 0.0 || height <= 0.0 {
            return Err(ProjectionError {
                lon,
                lat,
                reason: "degenerate bounding box".into(),
            });
        }
        Ok(GridPoint::new(
            (lon - self.min_lon) / width,
            (lat - self.min_lat) / height,
        ))
    }
}

/// Great-circle distance on a spherical Earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Haversine {
    pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
}

impl GeodesicDistance for Haversine {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
        let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());
        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * Self::EARTH_RADIUS_M * a.sqrt().asin()
    }
}
