use crate::draft::{Draft, DraftContext, ValidationIssue};
use crate::error::{Result, StudyError};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// Fields every record carries regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new(title: String, category: String) -> Self {
        Self::at(title, category, Utc::now())
    }

    pub fn at(title: String, category: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            category,
            created_at,
        }
    }
}

/// A schema for one family of records (notes, documents, materials).
///
/// Everything that differs between the three collections lives here, so the
/// store, filter, draft and controller are written once.
pub trait ContentKind: Sized + Clone + fmt::Debug + PartialEq + 'static {
    /// Singular name used in messages and errors.
    const NAME: &'static str;

    /// Draft form fields, in form order.
    type Field: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = StudyError>;

    /// Closed vocabulary used by the category selector.
    type Type: Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = StudyError> + Serialize;

    /// Kind-specific payload of a record.
    type Fields: Clone + fmt::Debug + PartialEq + Serialize;

    fn fields() -> &'static [Self::Field];

    fn title_field() -> Self::Field;

    fn category_field() -> Self::Field;

    /// Fields that must be non-blank for a draft to submit. Always includes the title.
    fn required() -> &'static [Self::Field];

    fn types() -> &'static [Self::Type];

    /// Derives the kind-specific payload from a draft. Title and category
    /// are handled by the caller.
    fn build(
        draft: &Draft<Self>,
        ctx: &DraftContext,
    ) -> std::result::Result<Self::Fields, Vec<ValidationIssue>>;

    fn record_type(fields: &Self::Fields) -> Option<Self::Type>;

    /// Free-text values the search term is matched against.
    fn search_text<'a>(metadata: &'a Metadata, fields: &'a Self::Fields) -> Vec<&'a str>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "K::Fields: Serialize"))]
pub struct Record<K: ContentKind> {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(flatten)]
    pub fields: K::Fields,
}

impl<K: ContentKind> Record<K> {
    pub fn new(metadata: Metadata, fields: K::Fields) -> Self {
        Self { metadata, fields }
    }

    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn record_type(&self) -> Option<K::Type> {
        K::record_type(&self.fields)
    }
}

/// Category/type selector. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Copy + PartialEq> Selector<T> {
    pub fn admits(&self, value: Option<T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => value == Some(*wanted),
        }
    }
}

impl<T: FromStr<Err = StudyError>> Selector<T> {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Selector::All);
        }
        trimmed.parse().map(Selector::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all"),
            Selector::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Top-level navigation, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Notes,
    Materials,
    Documents,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Notes,
        Section::Materials,
        Section::Documents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Notes => "Notes",
            Section::Materials => "Study Materials",
            Section::Documents => "PDF Library",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Dashboard => "dashboard",
            Section::Notes => "notes",
            Section::Materials => "materials",
            Section::Documents => "documents",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Section {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "home" => Ok(Section::Dashboard),
            "notes" | "note" => Ok(Section::Notes),
            "materials" | "material" => Ok(Section::Materials),
            "documents" | "document" | "docs" | "pdfs" => Ok(Section::Documents),
            other => Err(StudyError::UnknownSection(other.to_string())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Section {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
