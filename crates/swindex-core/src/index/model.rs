//! Index model types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category of declaration tracked by the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Class,
    Protocol,
    Extension,
    Enum,
    Struct,
    Constant,
}

impl Category {
    /// All categories, in the order they are extracted and serialized
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::Protocol,
        Self::Extension,
        Self::Enum,
        Self::Struct,
        Self::Constant,
    ];

    /// Key of this category in the serialized index
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Protocol => "protocols",
            Self::Extension => "extensions",
            Self::Enum => "enums",
            Self::Struct => "structs",
            Self::Constant => "constants",
        }
    }

    /// Source keyword that opens a declaration of this category.
    ///
    /// Constants have no opening keyword of their own.
    #[must_use]
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Class => Some("class"),
            Self::Protocol => Some("protocol"),
            Self::Extension => Some("extension"),
            Self::Enum => Some("enum"),
            Self::Struct => Some("struct"),
            Self::Constant => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single declaration entry in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    /// Source file path, stored as given
    pub file: String,
    /// Line of the opening keyword (1-indexed)
    pub line: usize,
    /// Method names (classes, protocols, extensions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Property names (classes, structs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    /// Case names (enums)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<String>>,
}

impl DeclarationRecord {
    /// Create a record with no member lists
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
            methods: None,
            properties: None,
            cases: None,
        }
    }

    /// Set the method list
    #[must_use]
    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = Some(methods);
        self
    }

    /// Set the property list
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<String>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set the case list
    #[must_use]
    pub fn with_cases(mut self, cases: Vec<String>) -> Self {
        self.cases = Some(cases);
        self
    }
}

/// Declarations keyed by name within one category
pub type Declarations = BTreeMap<String, DeclarationRecord>;

/// The full declaration index built by a run.
///
/// Field order matches the key order of the serialized file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub classes: Declarations,
    pub protocols: Declarations,
    pub extensions: Declarations,
    pub enums: Declarations,
    pub structs: Declarations,
    pub constants: Declarations,
}

impl Index {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations of one category
    #[must_use]
    pub const fn category(&self, category: Category) -> &Declarations {
        match category {
            Category::Class => &self.classes,
            Category::Protocol => &self.protocols,
            Category::Extension => &self.extensions,
            Category::Enum => &self.enums,
            Category::Struct => &self.structs,
            Category::Constant => &self.constants,
        }
    }

    /// Mutable declarations of one category
    pub fn category_mut(&mut self, category: Category) -> &mut Declarations {
        match category {
            Category::Class => &mut self.classes,
            Category::Protocol => &mut self.protocols,
            Category::Extension => &mut self.extensions,
            Category::Enum => &mut self.enums,
            Category::Struct => &mut self.structs,
            Category::Constant => &mut self.constants,
        }
    }

    /// Insert a record, replacing any same-named record in the category.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(
        &mut self,
        category: Category,
        name: impl Into<String>,
        record: DeclarationRecord,
    ) -> Option<DeclarationRecord> {
        self.category_mut(category).insert(name.into(), record)
    }

    /// Look up a record by category and name
    #[must_use]
    pub fn get(&self, category: Category, name: &str) -> Option<&DeclarationRecord> {
        self.category(category).get(name)
    }

    /// Total number of declarations across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.category(*c).len()).sum()
    }

    /// Whether no declarations have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
