//! Shared constants for booklet layout
//!
//! This module centralizes the fixed geometry of the booklet format and the
//! default values of the configurable page geometry.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Booklet Format
// =============================================================================

/// Physical column slots on each side of a printed sheet
pub const SLOTS_PER_SIDE: usize = 6;

/// Conceptual (reading-order) columns per sheet: both sides of it
pub const COLUMNS_PER_SET: usize = 2 * SLOTS_PER_SIDE;

/// Separator rules drawn between adjacent slots on each side
pub const SEPARATORS_PER_SIDE: usize = SLOTS_PER_SIDE - 1;

// =============================================================================
// Default Page Geometry
// =============================================================================

pub const DEFAULT_MARGIN_MM: f32 = 2.0;

pub const DEFAULT_COLUMN_GAP_MM: f32 = 2.0;

pub const DEFAULT_FONT_SIZE_PT: f32 = 5.7;

/// Extra leading added on top of the font size to get the line height
pub const DEFAULT_LINE_PADDING_PT: f32 = 0.1;

// =============================================================================
// Separator Rules
// =============================================================================

pub const DEFAULT_SEPARATOR_WIDTH_PT: f32 = 0.2;

/// Light grey
pub const DEFAULT_SEPARATOR_GRAY: f32 = 0.827;

/// Stroke width restored after drawing separators
pub const DEFAULT_STROKE_WIDTH_PT: f32 = 1.0;

// =============================================================================
// Fonts
// =============================================================================

/// Advance of every glyph in the standard Courier fonts, in 1/1000 em
pub const COURIER_ADVANCE: f32 = 600.0;

pub const NORMAL_FONT_NAME: &str = "Courier";

pub const BOLD_FONT_NAME: &str = "Courier-Bold";

// =============================================================================
// Markup
// =============================================================================

pub const HEADING_MARKER: char = '#';
