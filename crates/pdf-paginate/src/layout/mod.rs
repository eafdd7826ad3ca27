//! Layout calculation modules for pagination
//!
//! This module handles all the geometric calculations for slicing a rendered
//! document into pages:
//! - Geometry (page and content-area sizes in pixels)
//! - Orientation selection
//! - Segmentation (uniform and marker-aware)
//! - Segment placement on the physical page

mod geometry;
mod orientation;
mod placement;
mod segment;
mod types;

pub use geometry::*;
pub use orientation::*;
pub use placement::*;
pub use segment::*;
pub use types::*;
