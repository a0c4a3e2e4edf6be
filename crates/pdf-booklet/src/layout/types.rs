//! Layout data types
//!
//! These types carry the result of the text flow from the filler to the
//! imposition mapper and the renderer.

use crate::constants::COLUMNS_PER_SET;

/// A token with its position relative to the top-left corner of its column
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedToken {
    pub text: String,
    pub bold: bool,
    /// Distance from the column's left edge in points
    pub x_offset: f32,
    /// Distance from the first baseline downwards in points
    pub y_offset: f32,
}

/// One of the twelve reading-order columns of a column set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConceptualColumn {
    /// Tokens in placement order
    pub tokens: Vec<PlacedToken>,
    /// Virtual lines consumed so far (including blank lines)
    pub line_count: usize,
}

impl ConceptualColumn {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Twelve conceptual columns: the content of one printed sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSet {
    pub columns: [ConceptualColumn; COLUMNS_PER_SET],
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnSet {
    pub fn new() -> Self {
        Self {
            columns: std::array::from_fn(|_| ConceptualColumn::default()),
        }
    }

    /// True when no column holds any token
    ///
    /// Blank lines consume line slots without placing tokens, so a set can be
    /// empty while its line counts are not.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(ConceptualColumn::is_empty)
    }

    pub fn token_count(&self) -> usize {
        self.columns.iter().map(|c| c.tokens.len()).sum()
    }

    /// All tokens in reading order: column 0 first, placement order within a column
    pub fn tokens_in_reading_order(&self) -> impl Iterator<Item = &PlacedToken> {
        self.columns.iter().flat_map(|c| c.tokens.iter())
    }
}
