//! Page geometry in pixel space
//!
//! Converts a physical page format and margin into the pixel dimensions the
//! renderer used, so the rendered bitmap can be measured against them.

use crate::constants::mm_to_px;
use crate::types::{Orientation, PageFormat, PaginateError, Result};

use super::PageGeometry;

/// Resolve the pixel geometry of a page.
///
/// # Arguments
/// * `format` - The base page format
/// * `margin_mm` - Margin applied on every side
/// * `scale` - Render scale on top of 96 DPI
/// * `orientation` - Which way round the page is used
///
/// # Errors
/// Returns [`PaginateError::Config`] if the scale is not positive, the margin
/// is negative, or the margins leave less than one pixel of content.
pub fn resolve_geometry(
    format: PageFormat,
    margin_mm: f32,
    scale: f32,
    orientation: Orientation,
) -> Result<PageGeometry> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PaginateError::Config(format!(
            "Scale must be a positive number, got {}",
            scale
        )));
    }
    if !margin_mm.is_finite() || margin_mm < 0.0 {
        return Err(PaginateError::Config(format!(
            "Margin must be zero or positive, got {}mm",
            margin_mm
        )));
    }

    let (width_mm, height_mm) = format.dimensions_with_orientation(orientation);
    if 2.0 * margin_mm >= width_mm || 2.0 * margin_mm >= height_mm {
        return Err(PaginateError::Config(format!(
            "A {}mm margin leaves no content area on a {}mm x {}mm page",
            margin_mm, width_mm, height_mm
        )));
    }

    let content_width_px = mm_to_px(width_mm - 2.0 * margin_mm, scale);
    let content_height_px = mm_to_px(height_mm - 2.0 * margin_mm, scale);
    if content_width_px < 1.0 || content_height_px < 1.0 {
        return Err(PaginateError::Config(format!(
            "Content area is smaller than one pixel at scale {}",
            scale
        )));
    }

    Ok(PageGeometry {
        page_width_px: mm_to_px(width_mm, scale),
        page_height_px: mm_to_px(height_mm, scale),
        content_width_px,
        content_height_px,
        margin_px: mm_to_px(margin_mm, scale),
        scale,
    })
}
