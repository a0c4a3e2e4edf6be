use crate::constants::COURIER_ADVANCE;

/// Width of a run of text in a given font weight.
///
/// Layout and rendering must see the same metrics, otherwise tokens placed
/// back-to-back will overlap or drift apart on the page.
pub trait FontMetrics {
    /// Rendered width of `text` in points
    fn width(&self, text: &str, bold: bool) -> f32;
}

/// Metrics of the standard-14 Courier / Courier-Bold pair.
///
/// Both faces are monospaced with the same advance for every glyph, so the
/// weight does not change the width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourierMetrics {
    pub font_size: f32,
}

impl CourierMetrics {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Advance of a single glyph in points
    pub fn advance(&self) -> f32 {
        COURIER_ADVANCE / 1000.0 * self.font_size
    }
}

impl FontMetrics for CourierMetrics {
    fn width(&self, text: &str, _bold: bool) -> f32 {
        text.chars().count() as f32 * self.advance()
    }
}
