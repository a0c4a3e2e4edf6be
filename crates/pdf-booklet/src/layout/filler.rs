//! Column filler
//!
//! Flows the lines of a document into column sets. Every source line is
//! either blank (it consumes one line slot) or is tokenized and its tokens
//! are placed one after another, wrapping as the column width requires.
//! Tokens are never split, hyphenated or trimmed.

use super::cursor::{FillCursor, Step};
use super::types::{ColumnSet, PlacedToken};
use crate::geometry::PageGeometry;
use crate::metrics::FontMetrics;
use crate::text::{Token, tokenize_line};

/// Incremental text flow over a document
pub struct ColumnFiller<'a, M: FontMetrics> {
    geometry: &'a PageGeometry,
    metrics: &'a M,
    cursor: FillCursor,
    active: ColumnSet,
    finished: Vec<ColumnSet>,
}

impl<'a, M: FontMetrics> ColumnFiller<'a, M> {
    pub fn new(geometry: &'a PageGeometry, metrics: &'a M) -> Self {
        Self {
            geometry,
            metrics,
            cursor: FillCursor::new(geometry.max_lines),
            active: ColumnSet::new(),
            finished: Vec::new(),
        }
    }

    pub fn cursor(&self) -> &FillCursor {
        &self.cursor
    }

    /// The set currently receiving tokens
    pub fn active_set(&self) -> &ColumnSet {
        &self.active
    }

    /// Sets closed so far
    pub fn finished_sets(&self) -> &[ColumnSet] {
        &self.finished
    }

    /// Flow one raw source line.
    pub fn push_line(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        if line.is_empty() {
            self.push_blank_line();
        } else {
            self.push_tokens(&tokenize_line(line));
        }
    }

    /// Consume one line slot without placing anything.
    pub fn push_blank_line(&mut self) {
        let column = self.cursor.column_index;
        let step = self.cursor.skip_line();
        self.record(column, step);
    }

    /// Place the tokens of one non-blank line, then close the line.
    ///
    /// An empty token list still closes a line, as happens for a heading
    /// marker with no words after it.
    pub fn push_tokens(&mut self, tokens: &[Token]) {
        let column_width = self.geometry.column_width;
        let line_height = self.geometry.line_height;

        self.cursor.start_line();
        for token in tokens {
            let width = self.metrics.width(&token.text, token.bold);
            if width > column_width {
                log::warn!(
                    "Token {:?} is wider than the column ({:.2}pt > {:.2}pt)",
                    token.text,
                    width,
                    column_width
                );
            }

            let column = self.cursor.column_index;
            let step = self.cursor.prepare_token(width, column_width);
            self.record(column, step);

            let (x_offset, y_offset) = self.cursor.place(width, line_height);
            self.active.columns[self.cursor.column_index]
                .tokens
                .push(PlacedToken {
                    text: token.text.clone(),
                    bold: token.bold,
                    x_offset,
                    y_offset,
                });
        }

        let column = self.cursor.column_index;
        let step = self.cursor.end_line();
        self.record(column, step);
    }

    /// Close the flow and return every set, including a partially filled last one.
    pub fn finish(mut self) -> Vec<ColumnSet> {
        if !self.active.is_empty() {
            log::debug!(
                "Closing partial column set {} at column {}",
                self.cursor.set_index,
                self.cursor.column_index
            );
            self.finished.push(self.active);
        }
        self.finished
    }

    /// Mirror a cursor transition into the column data.
    fn record(&mut self, column: usize, step: Step) {
        match step {
            Step::Stay => {
                self.active.columns[column].line_count = self.cursor.line_index;
            }
            Step::NextColumn => {
                self.active.columns[column].line_count = self.cursor.max_lines();
            }
            Step::NextSet => {
                self.active.columns[column].line_count = self.cursor.max_lines();
                let full = std::mem::take(&mut self.active);
                log::debug!(
                    "Column set {} full ({} tokens)",
                    self.finished.len(),
                    full.token_count()
                );
                self.finished.push(full);
            }
        }
    }
}

/// Lay out a whole document into column sets.
///
/// A pure function of the text, the geometry and the metrics.
pub fn layout_document<M: FontMetrics>(
    text: &str,
    geometry: &PageGeometry,
    metrics: &M,
) -> Vec<ColumnSet> {
    let mut filler = ColumnFiller::new(geometry, metrics);
    for line in text.split('\n') {
        filler.push_line(line);
    }
    let sets = filler.finish();
    log::info!("Laid out {} column set(s)", sets.len());
    sets
}
