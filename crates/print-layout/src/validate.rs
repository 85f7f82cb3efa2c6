//! Layout validation
//!
//! Combines the geodesic size provider, the scale calculator and the page
//! tiler into the checks run while a print layout is being configured:
//! - New layouts: canvas size at the requested scale, the area bound, and
//!   the page tiling for the selected paper
//! - Existing templates: whether a template is selected at all
//! - Fit to page: the scale that fits an extent into the reference canvas

use crate::constants::{FIT_REFERENCE_SIDE, MAX_AREA_SQUARE_INCHES};
use crate::geodesic::GeodesicSizeProvider;
use crate::paper::{PaperSizeLookup, PrinterContext};
use crate::request::{AcceptedLayout, LayoutRequest};
use crate::scale::{calc_map_size, calc_scale};
use crate::tiler::calc_page_count;
use crate::types::*;
use crate::{LayoutError, Result};

/// Result of [`LayoutValidator::validate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// New layout with a computed canvas. Page counts are present even when
    /// the layout is oversized.
    Layout(LayoutResult),
    /// New layout whose extent has no computable ground size
    UnresolvedGeometry,
    /// New layout with a scale that is not a positive number
    InvalidScale(f64),
    /// Existing template mode
    Template { selected: bool },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        match self {
            Validation::Layout(result) => result.is_valid,
            Validation::Template { selected } => *selected,
            Validation::UnresolvedGeometry | Validation::InvalidScale(_) => false,
        }
    }

    /// Tiling computed during validation, if any
    pub fn page_count(&self) -> Option<PageCount> {
        match self {
            Validation::Layout(result) => Some(result.page_count),
            _ => None,
        }
    }

    pub fn canvas(&self) -> Option<CanvasSize> {
        match self {
            Validation::Layout(result) => Some(result.canvas),
            _ => None,
        }
    }
}

/// True if a canvas of this size is within the maximum layout area
pub fn is_within_bounds(canvas: CanvasSize) -> bool {
    canvas.area_square_inches() <= MAX_AREA_SQUARE_INCHES
}

/// Validates layout requests against a geodesic size provider and a paper
/// size lookup. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct LayoutValidator<G, P> {
    geodesic: G,
    papers: P,
    printer: PrinterContext,
}

impl<G, P> LayoutValidator<G, P>
where
    G: GeodesicSizeProvider,
    P: PaperSizeLookup,
{
    pub fn new(geodesic: G, papers: P) -> Self {
        Self {
            geodesic,
            papers,
            printer: PrinterContext::default(),
        }
    }

    pub fn with_printer(mut self, printer: PrinterContext) -> Self {
        self.printer = printer;
        self
    }

    pub fn printer(&self) -> &PrinterContext {
        &self.printer
    }

    /// Validate a request in the mode it selects
    pub fn validate(&self, request: &LayoutRequest) -> Validation {
        if !request.new_layout {
            return Validation::Template {
                selected: request.template.is_some(),
            };
        }

        let canvas = match self.canvas_size(request) {
            Ok(canvas) => canvas,
            Err(LayoutError::InvalidScale(scale)) => return Validation::InvalidScale(scale),
            Err(_) => return Validation::UnresolvedGeometry,
        };

        let is_valid = is_within_bounds(canvas);
        let page_count = self.page_count(canvas, request);

        log::debug!(
            "Canvas {:.1}x{:.1} ({:.2} sq in), valid: {}, pages: {}x{}",
            canvas.width,
            canvas.height,
            canvas.area_square_inches(),
            is_valid,
            page_count.x,
            page_count.y
        );

        Validation::Layout(LayoutResult {
            is_valid,
            canvas,
            page_count,
        })
    }

    /// Ground size of `extent`; missing, non-finite, negative or zero-area
    /// sizes are unresolved
    fn geo_size(&self, extent: &MapExtent) -> Result<GeoSize> {
        match self.geodesic.geodesic_size(extent) {
            Some(geo) if geo.has_area() => Ok(geo),
            other => {
                log::warn!("No usable geodesic size for extent {:?}: {:?}", extent, other);
                Err(LayoutError::UnresolvedGeometry)
            }
        }
    }

    /// Canvas size of the request's extent at the request's scale
    pub fn canvas_size(&self, request: &LayoutRequest) -> Result<CanvasSize> {
        let geo = self.geo_size(&request.extent)?;
        calc_map_size(request.scale, geo)
    }

    /// Pages needed to print `canvas` on the request's paper format
    pub fn page_count(&self, canvas: CanvasSize, request: &LayoutRequest) -> PageCount {
        let paper = self.papers.paper_size(&request.paper_format, &self.printer);
        if paper.is_none() {
            log::warn!("Unknown paper format '{}'", request.paper_format);
        }
        calc_page_count(canvas, paper, request.orientation)
    }

    /// Scale that fits `extent` into the 7 by 7 inch reference canvas
    pub fn fit_to_page(&self, extent: &MapExtent) -> Result<Scale> {
        let geo = self.geo_size(extent)?;

        let reference = CanvasSize::new(FIT_REFERENCE_SIDE, FIT_REFERENCE_SIDE);
        let scale = Scale::new(calc_scale(geo, reference))
            .map_err(|_| LayoutError::UnresolvedGeometry)?;

        log::debug!("Fit to page: {:?} -> {}", geo, scale);
        Ok(scale)
    }

    /// Validate and, if valid, produce the accepted layout.
    ///
    /// Rejections carry the user-facing message for the request's mode.
    pub fn accept(&self, request: &LayoutRequest) -> Result<AcceptedLayout> {
        let validation = self.validate(request);
        accept_validated(request, &validation)
    }
}

/// Accepted layout for a request that has already been validated.
///
/// Lets callers that show the validation result accept it without running
/// the geodesic and paper lookups a second time.
pub fn accept_validated(
    request: &LayoutRequest,
    validation: &Validation,
) -> Result<AcceptedLayout> {
    if !validation.is_valid() {
        return Err(if request.new_layout {
            LayoutError::InvalidLayoutSize
        } else {
            LayoutError::NoTemplateSelected
        });
    }

    Ok(AcceptedLayout {
        paper_format: request.paper_format.clone(),
        orientation: request.orientation,
        template_name: request.template_filename().to_string(),
        extent: request.extent,
        scale: request.scale,
        page_count: validation.page_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::ProjectedProvider;
    use crate::paper::StandardPaperSizes;

    fn request(width_m: f64, height_m: f64, scale: f64) -> LayoutRequest {
        LayoutRequest {
            scale,
            extent: MapExtent::new(0.0, 0.0, width_m, height_m),
            ..Default::default()
        }
    }

    #[test]
    fn test_bounds() {
        assert!(is_within_bounds(CanvasSize::new(7500.0, 7500.0)));
        assert!(!is_within_bounds(CanvasSize::new(7501.0, 7500.0)));
    }

    #[test]
    fn test_validate_new_layout() {
        let validator = LayoutValidator::new(ProjectedProvider::default(), StandardPaperSizes);
        let validation = validator.validate(&request(70_000.0, 35_000.0, 100.0));

        assert!(validation.is_valid());
        assert_eq!(validation.canvas(), Some(CanvasSize::new(700.0, 350.0)));
        assert_eq!(validation.page_count(), Some(PageCount::new(1, 1)));
    }

    #[test]
    fn test_validate_zero_scale() {
        let validator = LayoutValidator::new(ProjectedProvider::default(), StandardPaperSizes);
        let validation = validator.validate(&request(1000.0, 1000.0, 0.0));
        assert_eq!(validation, Validation::InvalidScale(0.0));
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_fit_to_page_degenerate_extent() {
        let validator = LayoutValidator::new(ProjectedProvider::default(), StandardPaperSizes);
        let result = validator.fit_to_page(&MapExtent::new(5.0, 5.0, 5.0, 5.0));
        assert!(matches!(result, Err(LayoutError::UnresolvedGeometry)));
    }
}
