use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_SCALE};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pagination configuration, fixed for a whole run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginationOptions {
    // Page geometry
    pub page_format: PageFormat,
    pub margin_mm: f32,
    /// Multiplier the renderer applied on top of 96 DPI
    pub scale: f32,

    // Orientation and breaking
    pub force_landscape: bool,
    pub use_marker_pagination: bool,

    // Page numbering
    pub add_page_numbers: bool,
    pub page_number_start: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            margin_mm: DEFAULT_MARGIN_MM,
            scale: DEFAULT_SCALE,
            force_landscape: false,
            use_marker_pagination: true,
            add_page_numbers: false,
            page_number_start: 1,
        }
    }
}

impl PaginationOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PaginateError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaginateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    ///
    /// The margin must leave a positive content area in both orientations,
    /// since the orientation is only known once the content has been measured.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PaginateError::Config(format!(
                "Scale must be a positive number, got {}",
                self.scale
            )));
        }

        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(PaginateError::Config(format!(
                "Margin must be zero or positive, got {}mm",
                self.margin_mm
            )));
        }

        let (width_mm, height_mm) = self.page_format.dimensions_mm();
        let shortest_side = width_mm.min(height_mm);
        if 2.0 * self.margin_mm >= shortest_side {
            return Err(PaginateError::Config(format!(
                "A {}mm margin leaves no content area on a {:?} page ({}mm x {}mm)",
                self.margin_mm, self.page_format, width_mm, height_mm
            )));
        }

        Ok(())
    }
}
