//! Inline emphasis parsing
//!
//! Only two pieces of markup are recognised:
//!
//! - `**bold**` spans inside a line. A span needs at least one character and
//!   may not contain `*`; anything that does not form such a pair stays
//!   literal text.
//! - Heading lines starting with `#`. The whole heading is bold and its words
//!   are emitted one segment each.

use crate::constants::HEADING_MARKER;
use regex::Regex;
use std::sync::LazyLock;

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+?)\*\*").expect("bold span pattern is valid"));

/// A contiguous run of text in one emphasis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

impl Segment {
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }
}

/// Whether a trimmed line is a heading
pub fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

/// Split a trimmed, non-blank line into emphasis segments.
///
/// Headings bypass the emphasis parser entirely.
pub fn parse_line(line: &str) -> Vec<Segment> {
    if is_heading(line) {
        parse_heading(line)
    } else {
        parse_inline_emphasis(line)
    }
}

/// Segments of a heading line.
///
/// The marker run is stripped and the rest is split on single spaces. Every
/// word becomes its own bold segment followed by one space, so a heading
/// always ends with a (bold) space token.
pub fn parse_heading(line: &str) -> Vec<Segment> {
    line.trim_start_matches(HEADING_MARKER)
        .trim()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| Segment::new(format!("{} ", word), true))
        .collect()
}

/// Segments of a regular line: `**...**` spans are bold, the rest is not.
pub fn parse_inline_emphasis(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in BOLD_SPAN.captures_iter(line) {
        let (Some(span), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if span.start() > last {
            segments.push(Segment::new(&line[last..span.start()], false));
        }
        segments.push(Segment::new(inner.as_str(), true));
        last = span.end();
    }

    if last < line.len() {
        segments.push(Segment::new(&line[last..], false));
    }

    segments
}
