//! Page orientation selection

use crate::types::{Orientation, PageFormat};

/// Pick the orientation whose aspect ratio is closest to the content's.
///
/// The content's `width / height` is compared against the reference page's
/// portrait and landscape ratios. Portrait wins ties. `force_landscape`
/// short-circuits the comparison.
pub fn select_orientation(
    content_width_px: f32,
    content_height_px: f32,
    reference: PageFormat,
    force_landscape: bool,
) -> Orientation {
    if force_landscape {
        return Orientation::Landscape;
    }
    if content_height_px <= 0.0 {
        return Orientation::Portrait;
    }

    let (width_mm, height_mm) = reference.dimensions_mm();
    let portrait_ratio = width_mm / height_mm;
    let landscape_ratio = height_mm / width_mm;
    let content_ratio = content_width_px / content_height_px;

    if (content_ratio - landscape_ratio).abs() < (content_ratio - portrait_ratio).abs() {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}
