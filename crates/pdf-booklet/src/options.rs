use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration
///
/// Everything the page geometry is derived from, plus the styling of the
/// separator rules. The slot and column counts are fixed by the imposition
/// and live in [`crate::constants`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Paper
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Margins
    pub horizontal_margin_mm: f32,
    pub vertical_margin_mm: f32,
    pub column_gap_mm: f32,

    // Text
    pub font_size_pt: f32,
    pub line_padding_pt: f32,

    // Separator rules
    pub separator_width_pt: f32,
    pub separator_gray: f32,

    // Document metadata
    pub title: Option<String>,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            horizontal_margin_mm: DEFAULT_MARGIN_MM,
            vertical_margin_mm: DEFAULT_MARGIN_MM,
            column_gap_mm: DEFAULT_COLUMN_GAP_MM,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            line_padding_pt: DEFAULT_LINE_PADDING_PT,
            separator_width_pt: DEFAULT_SEPARATOR_WIDTH_PT,
            separator_gray: DEFAULT_SEPARATOR_GRAY,
            title: None,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size in points with orientation applied
    pub fn page_size_pt(&self) -> (f32, f32) {
        let (w, h) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Line height in points
    pub fn line_height_pt(&self) -> f32 {
        self.font_size_pt + self.line_padding_pt
    }

    /// Validate the options
    ///
    /// This only rejects values that are nonsensical on their own. Whether
    /// the combination leaves room for any text is decided by
    /// [`crate::PageGeometry::new`].
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(BookletError::Config(format!(
                "Paper size must be positive, got {}mm x {}mm",
                width, height
            )));
        }

        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(BookletError::Config(format!(
                "Font size must be positive, got {}pt",
                self.font_size_pt
            )));
        }

        for (name, value) in [
            ("Horizontal margin", self.horizontal_margin_mm),
            ("Vertical margin", self.vertical_margin_mm),
            ("Column gap", self.column_gap_mm),
            ("Line padding", self.line_padding_pt),
            ("Separator width", self.separator_width_pt),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BookletError::Config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.separator_gray) {
            return Err(BookletError::Config(format!(
                "Separator gray must be between 0 and 1, got {}",
                self.separator_gray
            )));
        }

        Ok(())
    }
}
