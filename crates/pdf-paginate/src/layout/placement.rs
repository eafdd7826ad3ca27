//! Segment placement on the physical page
//!
//! This module handles calculating where a segment's image is drawn:
//! - Scaling to the printable area while preserving aspect ratio
//! - Horizontal centering
//! - Anchoring to the top margin

use crate::types::PageSize;

use super::{ComposedSegment, ContentSegment, PlacementResult, SubRegion};

/// Compose one segment onto a page.
///
/// The segment is first fitted to the printable height; if that makes it
/// wider than the printable width it is fitted to the width instead. The
/// result is centered horizontally and anchored to the top margin.
///
/// # Arguments
/// * `segment` - The slice of the source bitmap
/// * `source_width_px` - Full width of the source bitmap
/// * `margin_mm` - Margin applied on every side
/// * `page` - The oriented physical page
pub fn compose_segment(
    segment: &ContentSegment,
    source_width_px: u32,
    margin_mm: f32,
    page: PageSize,
) -> ComposedSegment {
    let content_width_mm = page.width_mm - 2.0 * margin_mm;
    let content_height_mm = page.height_mm - 2.0 * margin_mm;

    let aspect_ratio = source_width_px as f32 / segment.height_px as f32;

    let (width_mm, height_mm) = fit_to_area(aspect_ratio, content_width_mm, content_height_mm);

    ComposedSegment {
        placement: PlacementResult {
            x_mm: margin_mm + (content_width_mm - width_mm) / 2.0,
            y_mm: margin_mm,
            width_mm,
            height_mm,
        },
        subregion: SubRegion {
            x: 0,
            y: segment.y_px,
            width: source_width_px,
            height: segment.height_px,
        },
    }
}

/// Fit by height first, falling back to fit by width.
fn fit_to_area(aspect_ratio: f32, area_width: f32, area_height: f32) -> (f32, f32) {
    let width = area_height * aspect_ratio;
    if width > area_width {
        (area_width, area_width / aspect_ratio)
    } else {
        (width, area_height)
    }
}
