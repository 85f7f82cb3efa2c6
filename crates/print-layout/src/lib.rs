pub mod constants;
mod geodesic;
mod paper;
mod request;
mod scale;
mod tiler;
mod types;
mod validate;

pub use geodesic::*;
pub use paper::*;
pub use request::*;
pub use scale::{calc_map_size, calc_scale};
pub use tiler::calc_page_count;
pub use types::*;
pub use validate::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid scale: {0} (must be a positive number)")]
    InvalidScale(f64),
    #[error("Geodesic size of the map extent cannot be determined")]
    UnresolvedGeometry,
    #[error("Unknown paper format: {0}")]
    UnknownPaperFormat(String),
    #[error("Invalid layout size.")]
    InvalidLayoutSize,
    #[error("No template is selected.")]
    NoTemplateSelected,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
