//! Lightweight markup handling
//!
//! Turns one line of source text into the tokens the column filler places:
//! - Heading and bold-emphasis detection
//! - Whitespace-preserving word splitting

mod emphasis;
mod tokenize;

pub use emphasis::*;
pub use tokenize::*;
