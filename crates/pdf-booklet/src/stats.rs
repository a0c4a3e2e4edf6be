use crate::geometry::PageGeometry;
use crate::layout::{ColumnSet, layout_document};
use crate::metrics::CourierMetrics;
use crate::options::BookletOptions;
use crate::types::*;

/// Statistics about a booklet layout
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Lines in the source document, blank ones included
    pub source_lines: usize,
    /// Column sets produced, one per printed sheet
    pub column_sets: usize,
    /// Output page count (front and back of each sheet)
    pub output_pages: usize,
    /// Tokens placed across all sets, whitespace tokens included
    pub placed_tokens: usize,
    /// Capacity of a single column
    pub lines_per_column: usize,
    /// Width of a single column in points
    pub column_width_pt: f32,
}

impl BookletStatistics {
    pub(crate) fn from_layout(text: &str, geometry: &PageGeometry, sets: &[ColumnSet]) -> Self {
        Self {
            source_lines: text.split('\n').count(),
            column_sets: sets.len(),
            output_pages: sets.len() * 2,
            placed_tokens: sets.iter().map(ColumnSet::token_count).sum(),
            lines_per_column: geometry.max_lines,
            column_width_pt: geometry.column_width,
        }
    }

    /// Physical sheets to print
    pub fn output_sheets(&self) -> usize {
        self.column_sets
    }
}

/// Lay out the text without rendering it and report the result
pub fn calculate_statistics(text: &str, options: &BookletOptions) -> Result<BookletStatistics> {
    let geometry = PageGeometry::new(options)?;
    let metrics = CourierMetrics::new(geometry.font_size);
    let sets = layout_document(text, &geometry, &metrics);
    Ok(BookletStatistics::from_layout(text, &geometry, &sets))
}
