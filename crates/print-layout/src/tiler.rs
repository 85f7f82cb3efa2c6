//! Page tiling
//!
//! Works out how many sheets of a paper size are needed along each axis to
//! cover a layout canvas. Paper margins are not subtracted, so counts are
//! based on the full sheet rather than the printable area.

use crate::types::{CanvasSize, Orientation, PageCount, PaperSize};

/// Number of pages needed to tile `canvas` with `paper` in `orientation`.
///
/// An unknown (`None`) or degenerate paper size yields [`PageCount::UNKNOWN`].
pub fn calc_page_count(
    canvas: CanvasSize,
    paper: Option<PaperSize>,
    orientation: Orientation,
) -> PageCount {
    let Some(paper) = paper.filter(|p| !p.is_degenerate()) else {
        return PageCount::UNKNOWN;
    };

    let (width, height) = paper.oriented(orientation);

    PageCount::new(
        pages_along(canvas.width, width),
        pages_along(canvas.height, height),
    )
}

fn pages_along(length: f64, page: f64) -> i32 {
    if length <= 0.0 {
        return 0;
    }
    // `as` saturates at i32::MAX
    (length / page).ceil() as i32
}
