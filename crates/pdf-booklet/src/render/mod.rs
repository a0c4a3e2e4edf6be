//! Drawing of laid-out column sets
//!
//! This module handles everything that touches an output surface:
//! - The `Surface` drawing capability
//! - A PDF surface backed by lopdf
//! - The page renderer that walks column sets through the imposition

mod page;
mod pdf;
mod surface;

pub use page::render_column_sets;
pub use pdf::PdfSurface;
pub use surface::Surface;
