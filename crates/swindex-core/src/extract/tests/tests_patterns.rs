//! Tests for declaration patterns

use crate::extract::patterns::declaration_regex;
use crate::index::model::Category;
use rstest::rstest;

#[rstest]
#[case(Category::Class, "class Foo {", "Foo")]
#[case(Category::Protocol, "protocol Drawable: AnyObject {", "Drawable")]
#[case(Category::Extension, "extension UIView: Themeable {", "UIView")]
#[case(Category::Enum, "enum Direction: String {", "Direction")]
#[case(Category::Struct, "struct Point {", "Point")]
#[case(Category::Constant, "let limit: Int = 3", "limit")]
fn test_declaration_regex_per_category(
    #[case] category: Category,
    #[case] text: &str,
    #[case] name: &str,
) {
    let caps = declaration_regex(category).captures(text);
    assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some(name));
}

#[test]
fn test_declaration_regex_only_matches_own_keyword() {
    for category in Category::ALL {
        for other in Category::ALL.into_iter().filter(|c| *c != category) {
            let Some(keyword) = other.keyword() else {
                continue;
            };
            let text = format!("{keyword} Foo {{");
            assert!(
                !declaration_regex(category).is_match(&text),
                "{category} pattern matched {text:?}"
            );
        }
    }
}

#[test]
fn test_keyword_declarations_need_brace_on_same_line() {
    for category in Category::ALL {
        if let Some(keyword) = category.keyword() {
            assert!(!declaration_regex(category).is_match(&format!("{keyword} Foo\n{{")));
        }
    }
}
