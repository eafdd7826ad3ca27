//! Document I/O operations for pagination

use super::{PaginationOutcome, Paginator};
use crate::bitmap::SourceBitmap;
use crate::layout::BreakMarker;
use crate::options::PaginationOptions;
use crate::render::PdfPageWriter;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a rendered document image
pub async fn load_bitmap(path: impl AsRef<Path>) -> Result<SourceBitmap> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(SourceBitmap::from(image))
}

/// Load break markers from a CSV file.
///
/// The first column of each row holds a pixel position; the first row is a
/// header. Fractional positions are rounded to the nearest pixel.
pub async fn load_markers(path: impl AsRef<Path>) -> Result<Vec<BreakMarker>> {
    let path = path.as_ref().to_owned();
    let contents = tokio::fs::read_to_string(&path).await?;

    // CSV parsing is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || parse_markers(&contents)).await?
}

pub(crate) fn parse_markers(contents: &str) -> Result<Vec<BreakMarker>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut markers = Vec::new();

    for result in reader.records() {
        let record = result?;
        let field = match record.get(0).map(str::trim) {
            Some(field) if !field.is_empty() => field,
            _ => continue,
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let position = field.parse::<f64>().map_err(|_| {
            PaginateError::Marker(format!("line {}: '{}' is not a number", line, field))
        })?;
        if !position.is_finite() || position < 0.0 || position > u32::MAX as f64 {
            return Err(PaginateError::Marker(format!(
                "line {}: {} is not a valid pixel position",
                line, field
            )));
        }

        markers.push(BreakMarker::new(position.round() as u32));
    }

    Ok(markers)
}

/// Paginate a bitmap straight into a PDF document
pub async fn paginate_to_pdf(
    bitmap: SourceBitmap,
    markers: Vec<BreakMarker>,
    options: &PaginationOptions,
) -> Result<(Document, PaginationOutcome)> {
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let paginator = Paginator::new(options)?;
        let mut writer = PdfPageWriter::new(paginator.options());
        let outcome = paginator.paginate(&bitmap, &markers, &mut writer)?;
        Ok::<_, PaginateError>((writer.finish()?, outcome))
    })
    .await?
}

/// Save the paginated document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PaginateError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
