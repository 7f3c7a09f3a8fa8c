//! Tests for line index

use crate::extract::LineIndex;
use rstest::rstest;

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 2)]
#[case(4, 3)]
#[case(5, 3)]
fn test_line_of_offsets(#[case] offset: usize, #[case] expected: usize) {
    let lines = LineIndex::new("a\nb\nc\n");
    assert_eq!(lines.line_of(offset), expected);
}

#[test]
fn test_line_of_matches_newline_count() {
    let text = "import UIKit\n\n\nclass Foo {\n}\n";
    let lines = LineIndex::new(text);

    for offset in 0..text.len() {
        let expected = text[..offset].matches('\n').count() + 1;
        assert_eq!(lines.line_of(offset), expected, "offset {}", offset);
    }
}

#[test]
fn test_line_of_empty_content() {
    let lines = LineIndex::new("");
    assert_eq!(lines.line_of(0), 1);
}

#[test]
fn test_offset_past_trailing_newline_is_next_line() {
    let lines = LineIndex::new("a\n");
    assert_eq!(lines.line_of(2), 2);
}

#[test]
fn test_line_of_multibyte_content() {
    // "缓存" is 6 bytes; the newline sits at byte 6
    let text = "缓存\nclass Foo {";
    let lines = LineIndex::new(text);
    assert_eq!(lines.line_of(text.find("class").unwrap_or_default()), 2);
}
