//! PDF rendering modules for pagination
//!
//! This module handles all PDF-specific operations:
//! - Embedding bitmap segments as image XObjects
//! - Building output pages through the [`PageWriter`](crate::PageWriter) seam

mod xobject;
mod writer;

pub use xobject::create_image_xobject;
pub use writer::PdfPageWriter;
