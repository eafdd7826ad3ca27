//! Vertical segmentation of the rendered document
//!
//! Both segmenters walk the bitmap top to bottom and emit contiguous,
//! non-overlapping segments covering `[0, total_height_px)` exactly once.
//! A page capacity of zero yields no segments.

use super::{BreakMarker, ContentSegment, SegmentDecision, SkipReason};

/// Segments paired with the decision that ended each one
pub type Segmentation = (Vec<ContentSegment>, Vec<SegmentDecision>);

/// Split the content into full pages, with a shorter final page.
pub fn segment_uniform(total_height_px: u32, page_content_height_px: u32) -> Vec<ContentSegment> {
    segment_uniform_traced(total_height_px, page_content_height_px).0
}

/// [`segment_uniform`] with its decision trace
pub fn segment_uniform_traced(total_height_px: u32, page_content_height_px: u32) -> Segmentation {
    if total_height_px == 0 || page_content_height_px == 0 {
        return (Vec::new(), Vec::new());
    }

    let count = total_height_px.div_ceil(page_content_height_px) as usize;
    let mut segments = Vec::with_capacity(count);
    let mut decisions = Vec::with_capacity(count);

    for page_number in 0..count {
        let y_px = page_number as u32 * page_content_height_px;
        let height_px = page_content_height_px.min(total_height_px - y_px);
        segments.push(ContentSegment {
            y_px,
            height_px,
            page_number,
        });
        decisions.push(SegmentDecision::CapacityBreak {
            page_number,
            height_px,
        });
    }

    (segments, decisions)
}

/// Split the content, breaking exactly at markers that fall within reach of
/// the current page.
///
/// A marker strictly between the cursor and the end of the page's capacity
/// ends the page at the marker. Markers at or above the cursor are skipped as
/// already passed, so out-of-order or duplicate markers never produce empty
/// pages. Markers below the end of the content are skipped as well.
pub fn segment_with_markers(
    total_height_px: u32,
    page_content_height_px: u32,
    markers: &[BreakMarker],
) -> Vec<ContentSegment> {
    segment_with_markers_traced(total_height_px, page_content_height_px, markers).0
}

/// [`segment_with_markers`] with its decision trace
pub fn segment_with_markers_traced(
    total_height_px: u32,
    page_content_height_px: u32,
    markers: &[BreakMarker],
) -> Segmentation {
    let mut segments = Vec::new();
    let mut decisions = Vec::new();
    if page_content_height_px == 0 {
        return (segments, decisions);
    }

    let mut y = 0u32;
    let mut marker_index = 0usize;

    while y < total_height_px {
        let page_number = segments.len();

        if let Some(marker) = markers.get(marker_index) {
            let position_px = marker.position_px;

            let skip = if position_px <= y {
                Some(SkipReason::AlreadyPassed)
            } else if position_px > total_height_px {
                Some(SkipReason::BeyondContent)
            } else {
                None
            };

            if let Some(reason) = skip {
                decisions.push(SegmentDecision::MarkerSkipped {
                    marker_index,
                    position_px,
                    cursor_px: y,
                    reason,
                });
                marker_index += 1;
                continue;
            }

            let distance = position_px - y;
            if distance < page_content_height_px {
                segments.push(ContentSegment {
                    y_px: y,
                    height_px: distance,
                    page_number,
                });
                decisions.push(SegmentDecision::MarkerBreak {
                    page_number,
                    marker_index,
                    position_px,
                });
                y = position_px;
                marker_index += 1;
                continue;
            }
        }

        // Marker out of reach (or none left): ordinary full page
        let height_px = page_content_height_px.min(total_height_px - y);
        segments.push(ContentSegment {
            y_px: y,
            height_px,
            page_number,
        });
        decisions.push(SegmentDecision::CapacityBreak {
            page_number,
            height_px,
        });
        y += height_px;
    }

    (segments, decisions)
}
