use crate::types::{Result, Rgb};

/// Drawing capability the renderer draws through.
///
/// Coordinates are PDF points with the origin at the bottom-left corner of
/// the page. Text is drawn with its baseline at `y`.
pub trait Surface {
    /// Stroke width and colour for subsequent lines
    fn set_stroke(&mut self, width: f32, color: Rgb) -> Result<()>;

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()>;

    /// Draw `text` in the normal or bold face of the surface's font
    fn draw_text(&mut self, x: f32, y: f32, text: &str, bold: bool) -> Result<()>;

    /// Close the current page and start a new one
    fn new_page(&mut self) -> Result<()>;

    /// Close the last page and flush the output. Called exactly once.
    fn finalize(&mut self) -> Result<()>;
}
