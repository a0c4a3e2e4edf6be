//! Page rendering for booklets
//!
//! Each column set becomes two pages, front then back. All layout decisions
//! were made by the filler and the imposition; this is iteration and
//! coordinate arithmetic only.

use super::surface::Surface;
use crate::constants::DEFAULT_STROKE_WIDTH_PT;
use crate::geometry::PageGeometry;
use crate::imposition::{SheetSide, impose_side};
use crate::layout::ColumnSet;
use crate::options::BookletOptions;
use crate::types::*;

/// Draw every column set onto the surface and finalize it.
///
/// Fails with [`BookletError::NothingToRender`] before touching the surface
/// when there are no sets.
pub fn render_column_sets<S: Surface>(
    surface: &mut S,
    sets: &[ColumnSet],
    geometry: &PageGeometry,
    options: &BookletOptions,
) -> Result<()> {
    if sets.is_empty() {
        return Err(BookletError::NothingToRender);
    }

    for (set_idx, set) in sets.iter().enumerate() {
        render_side(surface, set, SheetSide::Front, geometry, options)?;
        surface.new_page()?;

        render_side(surface, set, SheetSide::Back, geometry, options)?;
        if set_idx < sets.len() - 1 {
            surface.new_page()?;
        }
    }

    surface.finalize()
}

fn render_side<S: Surface>(
    surface: &mut S,
    set: &ColumnSet,
    side: SheetSide,
    geometry: &PageGeometry,
    options: &BookletOptions,
) -> Result<()> {
    draw_separators(surface, geometry, options)?;

    let top = geometry.text_top();
    for assignment in impose_side(set, side) {
        let slot_x = geometry.slot_x[assignment.slot];
        for token in &assignment.column.tokens {
            surface.draw_text(
                slot_x + token.x_offset,
                top - token.y_offset,
                &token.text,
                token.bold,
            )?;
        }
    }

    Ok(())
}

/// Light rules between the slots, margin to margin
fn draw_separators<S: Surface>(
    surface: &mut S,
    geometry: &PageGeometry,
    options: &BookletOptions,
) -> Result<()> {
    let (bottom, top) = geometry.separator_span();

    surface.set_stroke(
        options.separator_width_pt,
        Rgb::gray(options.separator_gray),
    )?;
    for &x in &geometry.separator_x {
        surface.draw_line(x, bottom, x, top)?;
    }
    surface.set_stroke(DEFAULT_STROKE_WIDTH_PT, Rgb::BLACK)
}
