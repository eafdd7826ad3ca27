use crate::layout::{BreakMarker, SegmentDecision};
use crate::options::PaginationOptions;
use crate::paginate::Paginator;
use crate::types::*;

/// Calculate statistics for a pagination run without rendering anything
pub fn calculate_statistics(
    source_width_px: u32,
    source_height_px: u32,
    markers: &[BreakMarker],
    options: &PaginationOptions,
) -> Result<PaginationStatistics> {
    let paginator = Paginator::new(options.clone())?;
    let plan = paginator.plan(source_width_px, source_height_px, markers)?;

    let mut marker_breaks = 0;
    let mut capacity_breaks = 0;
    let mut skipped_markers = 0;
    for decision in &plan.decisions {
        match decision {
            SegmentDecision::MarkerBreak { .. } => marker_breaks += 1,
            SegmentDecision::CapacityBreak { .. } => capacity_breaks += 1,
            SegmentDecision::MarkerSkipped { .. } => skipped_markers += 1,
        }
    }

    Ok(PaginationStatistics {
        source_width_px,
        source_height_px,
        orientation: plan.orientation,
        strategy: plan.strategy,
        content_height_px: plan.geometry.content_height_whole_px(),
        output_pages: plan.page_count(),
        marker_breaks,
        capacity_breaks,
        skipped_markers,
        shortest_page_px: plan.segments().map(|s| s.height_px).min(),
    })
}
