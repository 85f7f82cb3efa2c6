use crate::constants::*;
use crate::{LayoutError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Paper used as looked up: width and height as the printer reports them
    #[default]
    Portrait,
    /// Paper rotated by 90°: width and height swap
    Landscape,
}

/// Ground-plane size of a map extent, in real-world units (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoSize {
    pub width: f64,
    pub height: f64,
}

impl GeoSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and positive on both axes
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Size of the layout canvas, in canvas units (1/100 inch)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height in inches
    pub fn inches(&self) -> (f64, f64) {
        (canvas_to_inches(self.width), canvas_to_inches(self.height))
    }

    pub fn area_square_inches(&self) -> f64 {
        self.width * self.height / CANVAS_UNITS_PER_SQUARE_INCH
    }

    /// Swap width and height
    pub fn transpose(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Map scale: ground units per canvas unit.
///
/// Always strictly positive and finite once constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f64);

impl Scale {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(LayoutError::InvalidScale(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Integer value shown to the user, rounded half to even
    pub fn rounded(self) -> i64 {
        self.0.round_ties_even() as i64
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.rounded())
    }
}

/// Physical paper dimensions, in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions with orientation applied, as (width, height)
    pub fn oriented(self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Portrait => (self.width, self.height),
            Orientation::Landscape => (self.height, self.width),
        }
    }

    /// A paper size that cannot be tiled with
    pub fn is_degenerate(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        !(positive(self.width) && positive(self.height))
    }
}

/// Standard paper formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperFormat {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl PaperFormat {
    pub const ALL: [PaperFormat; 6] = [
        PaperFormat::A3,
        PaperFormat::A4,
        PaperFormat::A5,
        PaperFormat::Letter,
        PaperFormat::Legal,
        PaperFormat::Tabloid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaperFormat::A3 => "A3",
            PaperFormat::A4 => "A4",
            PaperFormat::A5 => "A5",
            PaperFormat::Letter => "Letter",
            PaperFormat::Legal => "Legal",
            PaperFormat::Tabloid => "Tabloid",
        }
    }

    /// Portrait dimensions in millimeters
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperFormat::A3 => (297.0, 420.0),
            PaperFormat::A4 => (210.0, 297.0),
            PaperFormat::A5 => (148.0, 210.0),
            PaperFormat::Letter => (215.9, 279.4),
            PaperFormat::Legal => (215.9, 355.6),
            PaperFormat::Tabloid => (279.4, 431.8),
        }
    }

    /// Portrait size in canvas units, rounded to whole hundredths of an inch
    /// the way printer drivers report them.
    pub fn paper_size(self) -> PaperSize {
        let (w, h) = self.dimensions_mm();
        PaperSize::new(mm_to_canvas(w).round(), mm_to_canvas(h).round())
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        PaperFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::UnknownPaperFormat(name.to_string()))
    }
}

/// Number of pages along each axis needed to cover a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageCount {
    pub x: i32,
    pub y: i32,
}

impl PageCount {
    /// Reported when the paper format is unknown
    pub const UNKNOWN: PageCount = PageCount {
        x: UNKNOWN_PAGE_COUNT,
        y: UNKNOWN_PAGE_COUNT,
    };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::UNKNOWN
    }

    /// Total number of sheets, if the tiling is known
    pub fn total(&self) -> Option<i64> {
        self.is_known().then(|| i64::from(self.x) * i64::from(self.y))
    }
}

/// Outcome of validating a new layout: validity plus best-effort tiling.
///
/// Page counts are filled in even when the layout is oversized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutResult {
    pub is_valid: bool,
    pub canvas: CanvasSize,
    pub page_count: PageCount,
}

/// Rectangular map extent in map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl MapExtent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Valid and wider than a line or a point on both axes
    pub fn has_area(&self) -> bool {
        self.is_valid() && self.width() > 0.0 && self.height() > 0.0
    }

    /// All coordinates finite and max corner not below min corner
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.max_x >= self.min_x
            && self.max_y >= self.min_y
    }
}

impl FromStr for MapExtent {
    type Err = LayoutError;

    /// Parse `min_x,min_y,max_x,max_y`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LayoutError::Config(format!("Invalid extent '{}': {}", s, e)))?;

        match values.as_slice() {
            &[min_x, min_y, max_x, max_y] => Ok(Self::new(min_x, min_y, max_x, max_y)),
            _ => Err(LayoutError::Config(format!(
                "Extent must have 4 comma-separated values, got {}",
                values.len()
            ))),
        }
    }
}

/// Reference to an existing layout template
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutTemplate {
    pub name: String,
    pub filename: String,
}

impl LayoutTemplate {
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
        }
    }
}
