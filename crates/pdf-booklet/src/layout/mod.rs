//! Text flow into conceptual columns
//!
//! This module handles the pagination side of the booklet:
//! - Data types for placed tokens, columns and column sets
//! - The fill cursor and its transition rules
//! - The column filler that drives the cursor over a whole document

mod cursor;
mod filler;
mod types;

pub use cursor::*;
pub use filler::*;
pub use types::*;
