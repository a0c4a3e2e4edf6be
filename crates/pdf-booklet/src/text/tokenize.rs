use super::emphasis::Segment;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Atomic placement unit: a word or a whitespace run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub bold: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }
}

/// Split segments into word and whitespace tokens, keeping source order.
///
/// Whitespace runs are kept as tokens of their own so the filler advances
/// its cursor by their real width.
pub fn tokenize(segments: &[Segment]) -> Vec<Token> {
    let mut tokens = Vec::new();

    for segment in segments {
        let text = segment.text.as_str();
        let mut last = 0;
        for gap in WHITESPACE_RUN.find_iter(text) {
            if gap.start() > last {
                tokens.push(Token::new(&text[last..gap.start()], segment.bold));
            }
            tokens.push(Token::new(gap.as_str(), segment.bold));
            last = gap.end();
        }
        if last < text.len() {
            tokens.push(Token::new(&text[last..], segment.bold));
        }
    }

    tokens
}

/// Tokens of one trimmed, non-blank source line
pub fn tokenize_line(line: &str) -> Vec<Token> {
    tokenize(&super::emphasis::parse_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_spaces() {
        let tokens = tokenize(&[Segment::new("one  two\tthree", false)]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "  ", "two", "\t", "three"]);
        assert!(tokens.iter().all(|t| !t.bold));
    }

    #[test]
    fn test_bold_inherited_across_segments() {
        let tokens = tokenize_line("Hello **world**");
        assert_eq!(
            tokens,
            vec![
                Token::new("Hello", false),
                Token::new(" ", false),
                Token::new("world", true),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_whitespace_kept() {
        let tokens = tokenize(&[Segment::new(" and ", false)]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![" ", "and", " "]);
    }

    #[test]
    fn test_heading_tokens() {
        let tokens = tokenize_line("# Title Here");
        assert_eq!(
            tokens,
            vec![
                Token::new("Title", true),
                Token::new(" ", true),
                Token::new("Here", true),
                Token::new(" ", true),
            ]
        );
    }

    #[test]
    fn test_empty_segment_list() {
        assert!(tokenize(&[]).is_empty());
    }
}
