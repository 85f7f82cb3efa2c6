//! Shared constants for print layout calculations
//!
//! Canvas dimensions are expressed in hundredths of an inch throughout
//! the crate, matching the unit printer drivers report paper sizes in.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Canvas units per inch (1 canvas unit = 1/100 inch)
pub const CANVAS_UNITS_PER_INCH: f64 = 100.0;

/// Square canvas units per square inch
pub const CANVAS_UNITS_PER_SQUARE_INCH: f64 = CANVAS_UNITS_PER_INCH * CANVAS_UNITS_PER_INCH;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert inches to canvas units
#[inline]
pub fn inches_to_canvas(inches: f64) -> f64 {
    inches * CANVAS_UNITS_PER_INCH
}

/// Convert canvas units to inches
#[inline]
pub fn canvas_to_inches(units: f64) -> f64 {
    units / CANVAS_UNITS_PER_INCH
}

/// Convert millimeters to canvas units
#[inline]
pub fn mm_to_canvas(mm: f64) -> f64 {
    inches_to_canvas(mm / MM_PER_INCH)
}

// =============================================================================
// Layout Limits
// =============================================================================

/// Maximum layout size in inches. A layout is accepted while its area does
/// not exceed the area of a square with this side.
pub const MAX_SIZE_INCHES: f64 = 75.0;

/// Maximum layout area in square inches (75² = 5625)
pub const MAX_AREA_SQUARE_INCHES: f64 = MAX_SIZE_INCHES * MAX_SIZE_INCHES;

// =============================================================================
// Fit To Page
// =============================================================================

/// Side of the square reference canvas used by fit-to-page, in canvas units
/// (7 by 7 inches).
// TODO: pick the reference canvas from the selected paper format
pub const FIT_REFERENCE_SIDE: f64 = 700.0;

// =============================================================================
// Geodesy
// =============================================================================

/// Mean Earth radius in meters (IUGG)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Sentinel page count reported when the paper format cannot be resolved
pub const UNKNOWN_PAGE_COUNT: i32 = -1;
