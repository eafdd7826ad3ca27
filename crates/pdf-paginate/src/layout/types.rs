//! Layout data types for pagination
//!
//! These are plain values created fresh for every run. None of them own
//! bitmap data; segments and regions are windows into the source bitmap.

/// Pixel-space dimensions of one page at the render scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_px: f32,
    pub page_height_px: f32,
    /// Page width minus both margins
    pub content_width_px: f32,
    /// Page height minus both margins
    pub content_height_px: f32,
    pub margin_px: f32,
    pub scale: f32,
}

impl PageGeometry {
    /// Content height in whole pixels, as used for segmentation
    pub fn content_height_whole_px(&self) -> u32 {
        self.content_height_px.floor() as u32
    }
}

/// A vertical position in the source bitmap where the document asked for a
/// page break
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BreakMarker {
    pub position_px: u32,
}

impl BreakMarker {
    pub fn new(position_px: u32) -> Self {
        Self { position_px }
    }
}

/// The half-open slice `[y_px, y_px + height_px)` of the source bitmap
/// destined for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSegment {
    pub y_px: u32,
    pub height_px: u32,
    /// Zero-based index in emission order
    pub page_number: usize,
}

impl ContentSegment {
    /// First row past the end of the segment
    pub fn end_px(&self) -> u32 {
        self.y_px + self.height_px
    }
}

/// Where a segment is drawn on the page, in millimetres from the top-left
/// corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementResult {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PlacementResult {
    /// Center x coordinate
    pub fn center_x_mm(&self) -> f32 {
        self.x_mm + self.width_mm / 2.0
    }
}

/// A rectangular pixel window into the source bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A segment together with its page placement and pixel window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedSegment {
    pub placement: PlacementResult,
    pub subregion: SubRegion,
}

/// Why a break marker did not produce a page break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The cursor was already at or past the marker
    AlreadyPassed,
    /// The marker lies below the end of the content
    BeyondContent,
}

/// One step taken by a segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentDecision {
    /// A page ended exactly on a marker
    MarkerBreak {
        page_number: usize,
        marker_index: usize,
        position_px: u32,
    },
    /// A page ended because it was full (or the content ran out)
    CapacityBreak { page_number: usize, height_px: u32 },
    /// A marker was consumed without emitting a page
    MarkerSkipped {
        marker_index: usize,
        position_px: u32,
        cursor_px: u32,
        reason: SkipReason,
    },
}
