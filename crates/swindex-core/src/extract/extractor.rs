//! Extractor: Populates an index from the text of one file

use tracing::debug;

use super::lines::LineIndex;
use super::patterns::{CASE_REGEX, METHOD_REGEX, PROPERTY_REGEX, capture_all, declaration_regex};
use super::scope::MemberScope;
use crate::index::model::{Category, DeclarationRecord, Index};

/// Number of records written per category for one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub classes: usize,
    pub protocols: usize,
    pub extensions: usize,
    pub enums: usize,
    pub structs: usize,
    pub constants: usize,
}

impl ExtractStats {
    /// Records written for one category
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Class => self.classes,
            Category::Protocol => self.protocols,
            Category::Extension => self.extensions,
            Category::Enum => self.enums,
            Category::Struct => self.structs,
            Category::Constant => self.constants,
        }
    }

    fn bump(&mut self, category: Category) {
        let slot = match category {
            Category::Class => &mut self.classes,
            Category::Protocol => &mut self.protocols,
            Category::Extension => &mut self.extensions,
            Category::Enum => &mut self.enums,
            Category::Struct => &mut self.structs,
            Category::Constant => &mut self.constants,
        };
        *slot += 1;
    }

    /// Records written across all categories
    #[must_use]
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Add another file's counts to these
    pub fn accumulate(&mut self, other: &Self) {
        self.classes += other.classes;
        self.protocols += other.protocols;
        self.extensions += other.extensions;
        self.enums += other.enums;
        self.structs += other.structs;
        self.constants += other.constants;
    }
}

/// Textual declaration extractor.
///
/// Stateless apart from its member scope; the same extractor can be
/// reused for every file in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    scope: MemberScope,
}

impl Extractor {
    /// Create an extractor with the default (end-of-file) member scope
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member scope
    #[must_use]
    pub const fn with_scope(mut self, scope: MemberScope) -> Self {
        self.scope = scope;
        self
    }

    /// Extract declarations from one file into a fresh index
    #[must_use]
    pub fn extract(&self, file_path: &str, file_text: &str) -> Index {
        let mut index = Index::new();
        self.process(&mut index, file_path, file_text);
        index
    }

    /// Extract declarations from one file into `index`.
    ///
    /// Every match inserts or replaces a record, so a later declaration
    /// with the same category and name wins over an earlier one. Input
    /// that matches nothing leaves `index` untouched.
    pub fn process(&self, index: &mut Index, file_path: &str, file_text: &str) -> ExtractStats {
        let lines = LineIndex::new(file_text);
        let mut stats = ExtractStats::default();

        for category in Category::ALL {
            for caps in declaration_regex(category).captures_iter(file_text) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let record = DeclarationRecord::new(file_path, lines.line_of(whole.start()));
                let record = if category == Category::Constant {
                    record
                } else {
                    let body = self.scope.body(file_text, whole.start(), whole.end());
                    with_members(record, category, body)
                };
                index.insert(category, name.as_str(), record);
                stats.bump(category);
            }
        }

        debug!(
            "{}: {} classes, {} protocols, {} extensions, {} enums, {} structs, {} constants",
            file_path,
            stats.classes,
            stats.protocols,
            stats.extensions,
            stats.enums,
            stats.structs,
            stats.constants
        );
        stats
    }
}

/// Attach the member lists a category records
fn with_members(record: DeclarationRecord, category: Category, body: &str) -> DeclarationRecord {
    let methods = || capture_all(&METHOD_REGEX, body, 1);
    let properties = || capture_all(&PROPERTY_REGEX, body, 2);

    match category {
        Category::Class => record.with_methods(methods()).with_properties(properties()),
        Category::Protocol | Category::Extension => record.with_methods(methods()),
        Category::Enum => record.with_cases(capture_all(&CASE_REGEX, body, 1)),
        Category::Struct => record.with_properties(properties()),
        Category::Constant => record,
    }
}
