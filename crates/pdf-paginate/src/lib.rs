mod bitmap;
pub mod constants;
pub mod layout;
mod options;
pub mod paginate;
pub mod render;
mod stats;
mod types;

pub use bitmap::SourceBitmap;
pub use layout::{
    BreakMarker, ComposedSegment, ContentSegment, PageGeometry, PlacementResult, SegmentDecision,
    SkipReason, SubRegion,
};
pub use options::*;
pub use paginate::{
    PageWriter, PaginationOutcome, PaginationPlan, Paginator, PlannedPage, SegmentationStrategy,
    load_bitmap, load_markers, paginate_to_pdf, save_pdf,
};
pub use render::PdfPageWriter;
pub use stats::calculate_statistics;
pub use types::*;
