//! Fill cursor
//!
//! The cursor is the whole mutable state of the text flow: which column set
//! and column receive the next token, the virtual line inside that column
//! and the horizontal position on that line. Its transitions are:
//!
//! - **wrap**: a token that overflows the line while the cursor is not at
//!   the line start moves to the next line
//! - **advance**: a column whose line count reached capacity hands over to
//!   the next column, and the twelfth column hands over to column 0 of a
//!   fresh set
//! - **end of line / blank line**: consume one line, then advance if full

use crate::constants::COLUMNS_PER_SET;

/// Where the cursor went after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still in the same column
    Stay,
    /// Moved to the next column of the same set
    NextColumn,
    /// The set is full; moved to column 0 of a new set
    NextSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillCursor {
    pub set_index: usize,
    pub column_index: usize,
    pub line_index: usize,
    pub x: f32,
    max_lines: usize,
}

impl FillCursor {
    pub fn new(max_lines: usize) -> Self {
        Self {
            set_index: 0,
            column_index: 0,
            line_index: 0,
            x: 0.0,
            max_lines,
        }
    }

    /// Lines per column
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn is_column_full(&self) -> bool {
        self.line_index >= self.max_lines
    }

    /// Return to the start of the current line
    pub fn start_line(&mut self) {
        self.x = 0.0;
    }

    /// Consume one line for a blank source line.
    pub fn skip_line(&mut self) -> Step {
        if !self.is_column_full() {
            self.line_index += 1;
        }
        self.advance_if_full()
    }

    /// Make room for a token of `width` before it is placed.
    ///
    /// Wraps only on strict overflow and never at the line start, so a token
    /// wider than the column stays on its own line and overflows it.
    pub fn prepare_token(&mut self, width: f32, column_width: f32) -> Step {
        if self.x + width > column_width && self.x != 0.0 {
            self.line_index += 1;
            self.x = 0.0;
        }

        if self.is_column_full() {
            let step = self.advance();
            self.x = 0.0;
            step
        } else {
            Step::Stay
        }
    }

    /// Position `(x, y)` of a token of `width` and move past it.
    pub fn place(&mut self, width: f32, line_height: f32) -> (f32, f32) {
        let position = (self.x, self.line_index as f32 * line_height);
        self.x += width;
        position
    }

    /// Close the current line after the last token of a source line.
    pub fn end_line(&mut self) -> Step {
        self.line_index += 1;
        self.x = 0.0;
        self.advance_if_full()
    }

    fn advance_if_full(&mut self) -> Step {
        if self.is_column_full() {
            self.advance()
        } else {
            Step::Stay
        }
    }

    fn advance(&mut self) -> Step {
        self.column_index += 1;
        self.line_index = 0;
        if self.column_index >= COLUMNS_PER_SET {
            self.column_index = 0;
            self.set_index += 1;
            Step::NextSet
        } else {
            Step::NextColumn
        }
    }
}
