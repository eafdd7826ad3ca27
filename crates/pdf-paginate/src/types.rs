use crate::layout::SubRegion;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginateError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid break marker: {0}")]
    Marker(String),
    #[error("Region {0:?} lies outside the source bitmap")]
    RegionOutOfBounds(SubRegion),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PaginateError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

/// Supported output page formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    /// Get base dimensions (always portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::Letter => (215.9, 279.4),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Physical page size for the given orientation
    pub fn page_size(self, orientation: Orientation) -> PageSize {
        let (width_mm, height_mm) = self.dimensions_with_orientation(orientation);
        PageSize {
            width_mm,
            height_mm,
        }
    }
}

impl FromStr for PageFormat {
    type Err = PaginateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageFormat::A4),
            "letter" => Ok(PageFormat::Letter),
            other => Err(PaginateError::Config(format!(
                "Unknown page format '{}' (expected a4 or letter)",
                other
            ))),
        }
    }
}

/// An oriented physical page in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Statistics about a pagination run
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStatistics {
    /// Width of the rendered source bitmap
    pub source_width_px: u32,
    /// Height of the rendered source bitmap
    pub source_height_px: u32,
    /// Orientation applied to every output page
    pub orientation: Orientation,
    /// Whether break markers drove the segmentation
    pub strategy: crate::paginate::SegmentationStrategy,
    /// Page capacity used by the segmenter
    pub content_height_px: u32,
    /// Number of output pages
    pub output_pages: usize,
    /// Pages that ended exactly on a break marker
    pub marker_breaks: usize,
    /// Pages that ended because the content area was full
    pub capacity_breaks: usize,
    /// Markers ignored as already passed or out of range
    pub skipped_markers: usize,
    /// Height of the shortest emitted segment, if any
    pub shortest_page_px: Option<u32>,
}
