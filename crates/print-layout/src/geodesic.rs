//! Geodesic size providers
//!
//! A provider turns a map extent into its ground-plane size in meters, or
//! reports that it cannot (invalid extent, unknown projection).

use crate::constants::EARTH_MEAN_RADIUS_M;
use crate::types::{GeoSize, MapExtent};

/// Source of ground-plane sizes for map extents
pub trait GeodesicSizeProvider {
    /// Ground size of `extent`, or `None` if it cannot be computed
    fn geodesic_size(&self, extent: &MapExtent) -> Option<GeoSize>;
}

impl<F> GeodesicSizeProvider for F
where
    F: Fn(&MapExtent) -> Option<GeoSize>,
{
    fn geodesic_size(&self, extent: &MapExtent) -> Option<GeoSize> {
        self(extent)
    }
}

/// Extent in a projected coordinate system with linear units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedProvider {
    /// Meters per map unit (1.0 for metric projections, 0.3048 for feet)
    pub meters_per_unit: f64,
}

impl Default for ProjectedProvider {
    fn default() -> Self {
        Self {
            meters_per_unit: 1.0,
        }
    }
}

impl ProjectedProvider {
    pub fn new(meters_per_unit: f64) -> Self {
        Self { meters_per_unit }
    }
}

impl GeodesicSizeProvider for ProjectedProvider {
    fn geodesic_size(&self, extent: &MapExtent) -> Option<GeoSize> {
        let unit_ok = self.meters_per_unit.is_finite() && self.meters_per_unit > 0.0;
        if !unit_ok || !extent.has_area() {
            return None;
        }

        Some(GeoSize::new(
            extent.width() * self.meters_per_unit,
            extent.height() * self.meters_per_unit,
        ))
    }
}

/// Extent in longitude/latitude degrees, measured on a spherical Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicProvider {
    pub radius_m: f64,
}

impl Default for GeographicProvider {
    fn default() -> Self {
        Self {
            radius_m: EARTH_MEAN_RADIUS_M,
        }
    }
}

impl GeographicProvider {
    /// Great-circle distance between two (lon, lat) points in degrees
    pub fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lon1, lat1) = (from.0.to_radians(), from.1.to_radians());
        let (lon2, lat2) = (to.0.to_radians(), to.1.to_radians());

        let d_lat = lat2 - lat1;
        let d_lon = lon2 - lon1;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_m * c
    }
}

impl GeodesicSizeProvider for GeographicProvider {
    fn geodesic_size(&self, extent: &MapExtent) -> Option<GeoSize> {
        if !extent.has_area() {
            return None;
        }
        if extent.min_y < -90.0 || extent.max_y > 90.0 || extent.width() > 360.0 {
            return None;
        }

        let (center_lon, center_lat) = extent.center();

        // Arc length of the centre parallel
        let width = self.radius_m * extent.width().to_radians() * center_lat.to_radians().cos();
        let height = self.distance((center_lon, extent.min_y), (center_lon, extent.max_y));

        Some(GeoSize::new(width, height))
    }
}
