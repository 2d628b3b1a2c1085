//! # Filter Engine
//!
//! Pure derivation of the visible subset of a collection. A record is
//! visible when the search term occurs (case-insensitively) in any of the
//! kind's searchable fields AND the selector admits the record's type.
//! Input order is preserved and the result is recomputed from scratch on
//! every call; collections here are small enough that no index is kept.

use crate::model::{ContentKind, Record, Selector};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Query<K: ContentKind> {
    pub search_term: String,
    pub selector: Selector<K::Type>,
}

impl<K: ContentKind> Default for Query<K> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selector: Selector::All,
        }
    }
}

impl<K: ContentKind> Query<K> {
    pub fn new(search_term: impl Into<String>, selector: Selector<K::Type>) -> Self {
        Self {
            search_term: search_term.into(),
            selector,
        }
    }

    pub fn search(search_term: impl Into<String>) -> Self {
        Self::new(search_term, Selector::All)
    }

    pub fn only(selector: K::Type) -> Self {
        Self::new("", Selector::Only(selector))
    }

    pub fn matches(&self, record: &Record<K>) -> bool {
        self.selector.admits(record.record_type()) && matches_term(record, &self.search_term)
    }
}

fn matches_term<K: ContentKind>(record: &Record<K>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term_lower = term.to_lowercase();
    K::search_text(&record.metadata, &record.fields)
        .iter()
        .any(|text| text.to_lowercase().contains(&term_lower))
}

pub fn apply<K: ContentKind>(records: &[Record<K>], query: &Query<K>) -> Vec<Record<K>> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
