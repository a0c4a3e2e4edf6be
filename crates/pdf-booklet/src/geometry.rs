//! Page geometry derived from the booklet options
//!
//! All values are in PDF points with the origin at the bottom-left corner of
//! the page. The geometry is computed once and shared read-only by the
//! filler and the renderer.

use crate::constants::*;
use crate::options::BookletOptions;
use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    pub horizontal_margin: f32,
    pub vertical_margin: f32,
    pub column_gap: f32,
    pub font_size: f32,
    /// Width available to the text of a single column
    pub column_width: f32,
    /// Distance between consecutive baselines
    pub line_height: f32,
    /// Number of virtual lines a conceptual column holds
    pub max_lines: usize,
    /// Left edge of each physical slot
    pub slot_x: [f32; SLOTS_PER_SIDE],
    /// X position of the rule between slot `i` and slot `i + 1`
    pub separator_x: [f32; SEPARATORS_PER_SIDE],
}

impl PageGeometry {
    /// Derive the geometry, rejecting configurations that leave no room for text.
    pub fn new(options: &BookletOptions) -> Result<Self> {
        options.validate()?;

        let (page_width, page_height) = options.page_size_pt();
        let horizontal_margin = mm_to_pt(options.horizontal_margin_mm);
        let vertical_margin = mm_to_pt(options.vertical_margin_mm);
        let column_gap = mm_to_pt(options.column_gap_mm);
        let line_height = options.line_height_pt();

        let column_width = (page_width
            - 2.0 * horizontal_margin
            - SEPARATORS_PER_SIDE as f32 * column_gap)
            / SLOTS_PER_SIDE as f32;
        if column_width <= 0.0 {
            return Err(BookletError::Config(format!(
                "Calculated column content width is zero or negative ({}pt)",
                column_width
            )));
        }

        let lines = ((page_height - 2.0 * vertical_margin) / line_height).trunc();
        if lines < 1.0 {
            return Err(BookletError::Config(
                "No lines can fit vertically in a column".to_string(),
            ));
        }
        let max_lines = lines as usize;

        let slot_x: [f32; SLOTS_PER_SIDE] = std::array::from_fn(|i| {
            horizontal_margin + i as f32 * column_width + i as f32 * column_gap
        });
        let separator_x: [f32; SEPARATORS_PER_SIDE] =
            std::array::from_fn(|i| slot_x[i] + column_width);

        Ok(Self {
            page_width,
            page_height,
            horizontal_margin,
            vertical_margin,
            column_gap,
            font_size: options.font_size_pt,
            column_width,
            line_height,
            max_lines,
            slot_x,
            separator_x,
        })
    }

    /// Baseline y of the first line of every column
    pub fn text_top(&self) -> f32 {
        self.page_height - self.vertical_margin
    }

    /// Vertical extent `(bottom, top)` of the separator rules
    pub fn separator_span(&self) -> (f32, f32) {
        (self.vertical_margin, self.page_height - self.vertical_margin)
    }
}
