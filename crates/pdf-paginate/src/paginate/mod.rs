//! Pagination of a rendered document
//!
//! This module orchestrates one pagination run:
//! 1. Validate the configuration
//! 2. Choose the page orientation from the bitmap's aspect ratio
//! 3. Resolve the page geometry for that orientation
//! 4. Segment the bitmap (uniformly or at break markers)
//! 5. Compose every segment and hand it to a page writer

mod io;

pub use io::{load_bitmap, load_markers, paginate_to_pdf, save_pdf};

use crate::bitmap::SourceBitmap;
use crate::layout::{
    BreakMarker, ContentSegment, PageGeometry, PlacementResult, SegmentDecision, SubRegion,
    compose_segment, resolve_geometry, segment_uniform_traced, segment_with_markers_traced,
    select_orientation,
};
use crate::options::PaginationOptions;
use crate::types::*;

/// A sink for paginated output, one physical page per segment.
///
/// Calls arrive strictly in page order: `start_page` once per page, then
/// `draw_segment` for the segment belonging to that page.
pub trait PageWriter {
    /// Begin a new physical page. The size is the same for the whole run.
    fn start_page(&mut self, page: PageSize) -> Result<()>;

    /// Draw `subregion` of `bitmap` on the current page at `placement`.
    fn draw_segment(
        &mut self,
        bitmap: &SourceBitmap,
        subregion: SubRegion,
        placement: PlacementResult,
    ) -> Result<()>;
}

/// How the bitmap was cut into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationStrategy {
    /// Fixed-height pages
    Uniform,
    /// Pages end at break markers where they fit
    MarkerAware,
}

/// Everything needed to emit one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedPage {
    pub segment: ContentSegment,
    pub placement: PlacementResult,
    pub subregion: SubRegion,
}

/// The full result of pagination before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPlan {
    pub orientation: Orientation,
    pub page_size: PageSize,
    pub geometry: PageGeometry,
    pub strategy: SegmentationStrategy,
    pub pages: Vec<PlannedPage>,
    /// Why each page ended, plus any markers that were skipped
    pub decisions: Vec<SegmentDecision>,
}

impl PaginationPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &ContentSegment> {
        self.pages.iter().map(|page| &page.segment)
    }
}

/// Result of driving a page writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationOutcome {
    Paginated { pages: usize },
    /// The bitmap had no height; no pages were written
    NothingToPaginate,
}

/// Slices a rendered document into physical pages
#[derive(Debug, Clone)]
pub struct Paginator {
    options: PaginationOptions,
}

impl Paginator {
    /// Create a paginator, rejecting invalid configuration up front.
    pub fn new(options: PaginationOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Work out every page without touching a writer.
    pub fn plan(
        &self,
        source_width_px: u32,
        source_height_px: u32,
        markers: &[BreakMarker],
    ) -> Result<PaginationPlan> {
        let options = &self.options;

        if source_width_px == 0 && source_height_px > 0 {
            return Err(PaginateError::Config(format!(
                "Source bitmap is {}px tall but has no width",
                source_height_px
            )));
        }

        let orientation = select_orientation(
            source_width_px as f32,
            source_height_px as f32,
            options.page_format,
            options.force_landscape,
        );
        let geometry = resolve_geometry(
            options.page_format,
            options.margin_mm,
            options.scale,
            orientation,
        )?;
        let page_size = options.page_format.page_size(orientation);
        let capacity_px = geometry.content_height_whole_px();

        let strategy = if options.use_marker_pagination && !markers.is_empty() {
            SegmentationStrategy::MarkerAware
        } else {
            SegmentationStrategy::Uniform
        };

        log::debug!(
            "Paginating {}x{}px onto {:?} {:?} pages ({}px per page, {:?})",
            source_width_px,
            source_height_px,
            options.page_format,
            orientation,
            capacity_px,
            strategy
        );

        let (segments, decisions) = match strategy {
            SegmentationStrategy::Uniform => segment_uniform_traced(source_height_px, capacity_px),
            SegmentationStrategy::MarkerAware => {
                segment_with_markers_traced(source_height_px, capacity_px, markers)
            }
        };
        log_decisions(&decisions);

        let pages = segments
            .into_iter()
            .map(|segment| {
                let composed =
                    compose_segment(&segment, source_width_px, options.margin_mm, page_size);
                PlannedPage {
                    segment,
                    placement: composed.placement,
                    subregion: composed.subregion,
                }
            })
            .collect();

        Ok(PaginationPlan {
            orientation,
            page_size,
            geometry,
            strategy,
            pages,
            decisions,
        })
    }

    /// Paginate `bitmap` and write one page per segment to `writer`.
    pub fn paginate<W: PageWriter + ?Sized>(
        &self,
        bitmap: &SourceBitmap,
        markers: &[BreakMarker],
        writer: &mut W,
    ) -> Result<PaginationOutcome> {
        let plan = self.plan(bitmap.width_px(), bitmap.height_px(), markers)?;

        if plan.is_empty() {
            log::info!("Source bitmap has no height; nothing to paginate");
            return Ok(PaginationOutcome::NothingToPaginate);
        }

        for page in &plan.pages {
            writer.start_page(plan.page_size)?;
            writer.draw_segment(bitmap, page.subregion, page.placement)?;
        }

        log::debug!("Wrote {} pages", plan.page_count());
        Ok(PaginationOutcome::Paginated {
            pages: plan.page_count(),
        })
    }
}

fn log_decisions(decisions: &[SegmentDecision]) {
    for decision in decisions {
        match decision {
            SegmentDecision::MarkerSkipped {
                marker_index,
                position_px,
                cursor_px,
                reason,
            } => log::warn!(
                "Skipping break marker #{} at {}px (cursor at {}px): {:?}",
                marker_index,
                position_px,
                cursor_px,
                reason
            ),
            other => log::trace!("{:?}", other),
        }
    }
}
