//! Conversion between ground size, canvas size and map scale

use crate::types::{CanvasSize, GeoSize, Scale};
use crate::Result;

/// Scale at which `geo` fits inside `canvas` on both axes.
///
/// Returns the larger of the two ground/canvas ratios. The result is `0.0`
/// when the ground size has no finite area or the reference canvas has a
/// non-positive side; callers treat that as "cannot compute".
pub fn calc_scale(geo: GeoSize, canvas: CanvasSize) -> f64 {
    if canvas.width <= 0.0 || canvas.height <= 0.0 || !geo.has_area() {
        return 0.0;
    }

    let scale_x = geo.width / canvas.width;
    let scale_y = geo.height / canvas.height;
    scale_x.max(scale_y)
}

/// Canvas size covered by `geo` at `scale`.
///
/// Fails with [`LayoutError::InvalidScale`](crate::LayoutError::InvalidScale)
/// when `scale` is not a positive finite number.
pub fn calc_map_size(scale: f64, geo: GeoSize) -> Result<CanvasSize> {
    let scale = Scale::new(scale)?.value();
    Ok(CanvasSize::new(geo.width / scale, geo.height / scale))
}
