//! End-to-end booklet generation
//!
//! Text → column sets → PDF. The whole document is laid out before the first
//! drawing call, and the output is only handed to the caller once the
//! surface has been finalized successfully.

use crate::geometry::PageGeometry;
use crate::layout::layout_document;
use crate::metrics::CourierMetrics;
use crate::options::BookletOptions;
use crate::render::{PdfSurface, render_column_sets};
use crate::stats::BookletStatistics;
use crate::types::*;
use std::io::Write;
use std::path::Path;

/// Lay out `text` and write the booklet PDF into `writer`.
///
/// Configuration errors are reported before anything is written.
pub fn render_booklet<W: Write>(
    text: &str,
    options: &BookletOptions,
    writer: W,
) -> Result<BookletStatistics> {
    let geometry = PageGeometry::new(options)?;
    let metrics = CourierMetrics::new(geometry.font_size);

    let sets = layout_document(text, &geometry, &metrics);
    if sets.is_empty() {
        return Err(BookletError::NothingToRender);
    }

    let mut surface = PdfSurface::new(writer, &geometry).with_title(options.title.clone());
    render_column_sets(&mut surface, &sets, &geometry, options)?;

    let stats = BookletStatistics::from_layout(text, &geometry, &sets);
    log::info!(
        "Rendered {} column set(s) onto {} page(s)",
        stats.column_sets,
        stats.output_pages
    );
    Ok(stats)
}

/// Render the booklet into memory
pub fn booklet_bytes(text: &str, options: &BookletOptions) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    render_booklet(text, options, &mut bytes)?;
    Ok(bytes)
}

/// Render the booklet and write it to `output_path`.
///
/// The file is only created once rendering succeeded.
pub async fn generate_booklet(
    text: &str,
    options: &BookletOptions,
    output_path: impl AsRef<Path>,
) -> Result<BookletStatistics> {
    let text = text.to_owned();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // Layout and PDF generation are CPU-bound
    let (bytes, stats) = tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        let stats = render_booklet(&text, &options, &mut bytes)?;
        Ok::<_, BookletError>((bytes, stats))
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Booklet written to {}", output_path.display());

    Ok(stats)
}

/// Load a source document
pub async fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(text)
}
