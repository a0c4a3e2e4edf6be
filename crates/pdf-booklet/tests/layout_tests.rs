use pdf_booklet::*;

/// One point per character, whatever the weight
struct FixedMetrics;

impl FontMetrics for FixedMetrics {
    fn width(&self, text: &str, _bold: bool) -> f32 {
        text.chars().count() as f32
    }
}

const LINE_HEIGHT: f32 = 2.0;

fn create_geometry(column_width: f32, max_lines: usize) -> PageGeometry {
    PageGeometry {
        page_width: 6.0 * column_width,
        page_height: max_lines as f32 * LINE_HEIGHT,
        horizontal_margin: 0.0,
        vertical_margin: 0.0,
        column_gap: 0.0,
        font_size: 1.0,
        column_width,
        line_height: LINE_HEIGHT,
        max_lines,
        slot_x: std::array::from_fn(|i| i as f32 * column_width),
        separator_x: std::array::from_fn(|i| (i + 1) as f32 * column_width),
    }
}

fn placed(text: &str, bold: bool, x_offset: f32, y_offset: f32) -> PlacedToken {
    PlacedToken {
        text: text.to_string(),
        bold,
        x_offset,
        y_offset,
    }
}

fn texts(column: &ConceptualColumn) -> Vec<&str> {
    column.tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_hello_world_on_first_line() {
    let geometry = create_geometry(100.0, 10);
    let sets = layout_document("Hello **world**", &geometry, &FixedMetrics);

    assert_eq!(sets.len(), 1);
    let column = &sets[0].columns[0];
    assert_eq!(
        column.tokens,
        vec![
            placed("Hello", false, 0.0, 0.0),
            placed(" ", false, 5.0, 0.0),
            placed("world", true, 6.0, 0.0),
        ]
    );
    assert_eq!(column.line_count, 1);
    assert!(sets[0].columns[1..].iter().all(|c| c.is_empty()));
}

#[test]
fn test_heading_is_bold() {
    let geometry = create_geometry(100.0, 10);
    let sets = layout_document("# Title Here", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(texts(column), vec!["Title", " ", "Here", " "]);
    assert!(column.tokens.iter().all(|t| t.bold));
    assert!(column.tokens.iter().all(|t| t.y_offset == 0.0));
    assert_eq!(column.line_count, 1);
}

#[test]
fn test_blank_line_consumes_one_slot() {
    let geometry = create_geometry(100.0, 10);
    let sets = layout_document("first\n\nsecond", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(
        column.tokens,
        vec![
            placed("first", false, 0.0, 0.0),
            placed("second", false, 0.0, 2.0 * LINE_HEIGHT),
        ]
    );
    assert_eq!(column.line_count, 3);
}

#[test]
fn test_bare_heading_marker_takes_a_line() {
    let geometry = create_geometry(100.0, 10);
    let sets = layout_document("##\nnext", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(column.tokens, vec![placed("next", false, 0.0, LINE_HEIGHT)]);
    assert_eq!(column.line_count, 2);
}

#[test]
fn test_whitespace_only_line_is_blank() {
    let geometry = create_geometry(100.0, 10);
    let sets = layout_document("a\n   \t\nb", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(texts(column), vec!["a", "b"]);
    assert_eq!(column.tokens[1].y_offset, 2.0 * LINE_HEIGHT);
}

#[test]
fn test_exact_fit_does_not_wrap() {
    let geometry = create_geometry(10.0, 10);
    let sets = layout_document("aaaaa bbbb", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert!(column.tokens.iter().all(|t| t.y_offset == 0.0));
    assert_eq!(column.tokens[2].x_offset, 6.0);
    assert_eq!(column.line_count, 1);
}

#[test]
fn test_overflow_wraps_to_next_line() {
    let geometry = create_geometry(10.0, 10);
    let sets = layout_document("aaaaa bbbbb", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(
        column.tokens,
        vec![
            placed("aaaaa", false, 0.0, 0.0),
            placed(" ", false, 5.0, 0.0),
            placed("bbbbb", false, 0.0, LINE_HEIGHT),
        ]
    );
    assert_eq!(column.line_count, 2);
}

#[test]
fn test_space_at_wrap_point_starts_new_line() {
    let geometry = create_geometry(5.0, 10);
    let sets = layout_document("aaaaa bb", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(
        column.tokens,
        vec![
            placed("aaaaa", false, 0.0, 0.0),
            placed(" ", false, 0.0, LINE_HEIGHT),
            placed("bb", false, 1.0, LINE_HEIGHT),
        ]
    );
}

#[test]
fn test_wide_token_overflows_column() {
    let geometry = create_geometry(10.0, 10);
    let sets = layout_document("abcdefghijklmnop\nnext", &geometry, &FixedMetrics);

    let column = &sets[0].columns[0];
    assert_eq!(
        column.tokens,
        vec![
            placed("abcdefghijklmnop", false, 0.0, 0.0),
            placed("next", false, 0.0, LINE_HEIGHT),
        ]
    );
}

#[test]
fn test_line_continues_into_next_column() {
    let geometry = create_geometry(5.0, 2);
    let sets = layout_document("aa bb cc dd ee", &geometry, &FixedMetrics);

    let first = &sets[0].columns[0];
    let second = &sets[0].columns[1];
    assert_eq!(texts(first), vec!["aa", " ", "bb", " ", "cc", " "]);
    assert_eq!(first.line_count, 2);
    assert_eq!(
        second.tokens,
        vec![
            placed("dd", false, 0.0, 0.0),
            placed(" ", false, 2.0, 0.0),
            placed("ee", false, 3.0, 0.0),
        ]
    );
    assert_eq!(second.line_count, 1);
}

#[test]
fn test_exact_capacity_fills_one_set() {
    let max_lines = 4;
    let geometry = create_geometry(20.0, max_lines);
    let text = vec!["word"; max_lines * COLUMNS_PER_SET].join("\n");

    let sets = layout_document(&text, &geometry, &FixedMetrics);

    assert_eq!(sets.len(), 1);
    for column in &sets[0].columns {
        assert_eq!(column.tokens.len(), max_lines);
        assert_eq!(column.line_count, max_lines);
    }
}

#[test]
fn test_one_line_more_opens_second_set() {
    let max_lines = 4;
    let geometry = create_geometry(20.0, max_lines);
    let text = vec!["word"; max_lines * COLUMNS_PER_SET + 1].join("\n");

    let sets = layout_document(&text, &geometry, &FixedMetrics);

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].token_count(), 1);
    assert_eq!(sets[1].columns[0].tokens[0].y_offset, 0.0);
}

#[test]
fn test_empty_document_has_no_sets() {
    let geometry = create_geometry(20.0, 4);
    assert!(layout_document("", &geometry, &FixedMetrics).is_empty());
    assert!(layout_document("\n\n  \n", &geometry, &FixedMetrics).is_empty());
}

#[test]
fn test_set_filled_with_blank_lines_is_kept() {
    let max_lines = 2;
    let geometry = create_geometry(20.0, max_lines);
    let mut text = "\n".repeat(max_lines * COLUMNS_PER_SET);
    text.push_str("after");

    let sets = layout_document(&text, &geometry, &FixedMetrics);

    assert_eq!(sets.len(), 2);
    assert!(sets[0].is_empty());
    assert_eq!(texts(&sets[1].columns[0]), vec!["after"]);
}

#[test]
fn test_reading_order_preserves_token_order() {
    let geometry = create_geometry(12.0, 3);
    let lines = [
        "# Chapter One",
        "The quick brown fox jumps over the lazy dog.",
        "",
        "Some **bold** words and some plain ones follow here.",
        "Short",
        "A considerably longer line that needs several wraps to fit.",
    ];
    let text = lines.repeat(6).join("\n");

    let sets = layout_document(&text, &geometry, &FixedMetrics);
    assert!(sets.len() > 1);

    let expected: Vec<Token> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(tokenize_line)
        .collect();
    let actual: Vec<Token> = sets
        .iter()
        .flat_map(|set| set.tokens_in_reading_order())
        .map(|t| Token::new(t.text.clone(), t.bold))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_layout_is_deterministic() {
    let geometry = create_geometry(15.0, 5);
    let text = "Alpha **beta** gamma\n\n# Delta\nepsilon zeta eta theta iota kappa lambda";

    let first = layout_document(text, &geometry, &FixedMetrics);
    let second = layout_document(text, &geometry, &FixedMetrics);

    assert_eq!(first, second);
}

#[test]
fn test_filler_cursor_tracks_progress() {
    let geometry = create_geometry(20.0, 2);
    let mut filler = ColumnFiller::new(&geometry, &FixedMetrics);

    filler.push_line("one");
    assert_eq!(filler.cursor().column_index, 0);
    assert_eq!(filler.cursor().line_index, 1);

    filler.push_blank_line();
    assert_eq!(filler.cursor().column_index, 1);
    assert_eq!(filler.cursor().line_index, 0);
    assert_eq!(filler.active_set().columns[0].line_count, 2);
    assert!(filler.finished_sets().is_empty());

    let sets = filler.finish();
    assert_eq!(sets.len(), 1);
}

#[test]
fn test_courier_layout_on_default_geometry() {
    let options = BookletOptions::default();
    let geometry = PageGeometry::new(&options).unwrap();
    let metrics = CourierMetrics::new(geometry.font_size);

    // 27 Courier glyphs fit a default column, the 28th wraps
    let line = format!("{} {}", "x".repeat(26), "y");
    let sets = layout_document(&line, &geometry, &metrics);

    let column = &sets[0].columns[0];
    assert_eq!(texts(column), vec![&"x".repeat(26)[..], " ", "y"]);
    assert_eq!(column.tokens[1].y_offset, 0.0);
    assert_eq!(column.tokens[2].y_offset, geometry.line_height);
    assert_eq!(column.tokens[2].x_offset, 0.0);
}
