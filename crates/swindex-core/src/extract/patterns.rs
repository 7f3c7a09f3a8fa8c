//! Declaration and member patterns
//!
//! `.` never crosses a newline, so an opening brace must sit on the same
//! line as the declared name. `\s` does match newlines. None of the
//! patterns are anchored on word boundaries.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::index::model::Category;

// `let name: Type`, anywhere in the file
const CONSTANT_PATTERN: &str = r"let\s+(\w+)\s*:\s*\w+";

// Indexed by `Category` discriminant, in `Category::ALL` order
static DECLARATION_REGEXES: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    Category::ALL.map(|category| {
        let pattern = category.keyword().map_or_else(
            || CONSTANT_PATTERN.to_string(),
            |keyword| format!(r"{keyword}\s+(\w+).*?\{{"),
        );
        Regex::new(&pattern).expect("declaration pattern")
    })
});

pub(crate) static METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"func\s+(\w+)").expect("method pattern"));

// Group 2 is the name; group 1 is the binding keyword
pub(crate) static PROPERTY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(let|var)\s+(\w+)").expect("property pattern"));

pub(crate) static CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"case\s+(\w+)").expect("case pattern"));

/// Pattern that detects declarations of `category`
pub(crate) fn declaration_regex(category: Category) -> &'static Regex {
    &DECLARATION_REGEXES[category as usize]
}

/// Capture group `group` of every match of `regex`, in textual order
pub(crate) fn capture_all(regex: &Regex, text: &str, group: usize) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(group).map(|m| m.as_str().to_string()))
        .collect()
}
