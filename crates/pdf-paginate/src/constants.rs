//! Shared constants for pagination
//!
//! Unit conversions between the three coordinate spaces in play: pixels of
//! the rendered bitmap, millimetres of the physical page, and PDF points.

// =============================================================================
// Unit Conversion
// =============================================================================

/// CSS reference pixels per inch
pub const PX_PER_INCH: f32 = 96.0;

/// Pixels per millimeter at 96 DPI (1 inch = 25.4mm)
pub const PX_PER_MM: f32 = PX_PER_INCH / 25.4; // ≈ 3.77953

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to pixels at the given render scale
#[inline]
pub fn mm_to_px(mm: f32, scale: f32) -> f32 {
    mm * PX_PER_MM * scale
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Defaults
// =============================================================================

/// Default margin on every side of the page (mm)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Default render scale factor
pub const DEFAULT_SCALE: f32 = 1.0;

// =============================================================================
// Page Numbers
// =============================================================================

/// Default font size for page numbers (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 8.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
