use crate::types::*;
use crate::{LayoutError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the validator reads about the layout being configured
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutRequest {
    // Paper
    pub orientation: Orientation,
    pub paper_format: String,

    // Map
    pub scale: f64,
    pub extent: MapExtent,

    // Mode
    pub new_layout: bool,
    pub template: Option<LayoutTemplate>,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            paper_format: PaperFormat::Letter.name().to_string(),
            scale: 1.0,
            extent: MapExtent::default(),
            new_layout: true,
            template: None,
        }
    }
}

impl LayoutRequest {
    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let request = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse request: {}", e)))?;
        Ok(request)
    }

    /// Save the request to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize request: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Filename of the selected template; empty for new layouts or when no
    /// template is selected
    pub fn template_filename(&self) -> &str {
        if self.new_layout {
            return "";
        }
        self.template
            .as_ref()
            .map(|t| t.filename.as_str())
            .unwrap_or_default()
    }

    /// Cheap input checks, run before any geometry is computed
    pub fn validate(&self) -> Result<()> {
        if !self.new_layout {
            return Ok(());
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(LayoutError::Config(format!(
                "Scale must be a positive number, got {}",
                self.scale
            )));
        }

        if self.paper_format.trim().is_empty() {
            return Err(LayoutError::Config("No paper format specified".to_string()));
        }

        Ok(())
    }
}

/// Settings a caller may persist once a layout has been accepted
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintSettings {
    pub orientation: Orientation,
    pub paper_format: String,
    pub scale: f64,
    pub template: String,
}

/// A layout that passed validation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcceptedLayout {
    pub paper_format: String,
    pub orientation: Orientation,
    /// Empty for new layouts
    pub template_name: String,
    pub extent: MapExtent,
    pub scale: f64,
    /// Only present for new layouts
    pub page_count: Option<PageCount>,
}

impl AcceptedLayout {
    pub fn settings(&self) -> PrintSettings {
        PrintSettings {
            orientation: self.orientation,
            paper_format: self.paper_format.clone(),
            scale: self.scale,
            template: self.template_name.clone(),
        }
    }
}
