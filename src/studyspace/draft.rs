//! # Draft Form
//!
//! A [`Draft`] is the uncommitted input of a record being composed. Field
//! updates are never validated; validation happens only on [`Draft::submit`],
//! which either produces a brand new [`Record`] or reports every
//! [`ValidationIssue`] at once and leaves the draft untouched.
//!
//! Submitting does not insert anything. The controller owns that step.

use crate::config::StudyConfig;
use crate::model::{ContentKind, Metadata, Record};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_DELIMITER: char = ',';

/// Settings that shape how a draft turns into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContext {
    pub default_category: String,
    pub tag_delimiter: char,
}

impl Default for DraftContext {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            tag_delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl From<&StudyConfig> for DraftContext {
    fn from(config: &StudyConfig) -> Self {
        Self {
            default_category: config.default_category.clone(),
            tag_delimiter: config.tag_delimiter,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("{field} is required")]
    Missing { field: String },

    #[error("\"{value}\" is not a valid {field}")]
    Invalid { field: String, value: String },
}

impl ValidationIssue {
    pub fn missing(field: impl ToString) -> Self {
        ValidationIssue::Missing {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: impl ToString, value: impl Into<String>) -> Self {
        ValidationIssue::Invalid {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft<K: ContentKind> {
    values: BTreeMap<K::Field, String>,
}

impl<K: ContentKind> Default for Draft<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: ContentKind> Draft<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: K::Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: K::Field, value: impl Into<String>) -> Self {
        self.update(field, value);
        self
    }

    /// Raw value, empty if never set.
    pub fn get(&self, field: K::Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, `None` when blank.
    pub fn value(&self, field: K::Field) -> Option<&str> {
        let trimmed = self.get(field).trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Every form field with its current value, in form order.
    pub fn entries(&self) -> Vec<(K::Field, &str)> {
        K::fields().iter().map(|f| (*f, self.get(*f))).collect()
    }

    pub fn validate(&self, ctx: &DraftContext) -> Vec<ValidationIssue> {
        let mut issues: Vec<ValidationIssue> = K::required()
            .iter()
            .filter(|field| self.value(**field).is_none())
            .map(ValidationIssue::missing)
            .collect();

        if let Err(kind_issues) = K::build(self, ctx) {
            for issue in kind_issues {
                if !issues.contains(&issue) {
                    issues.push(issue);
                }
            }
        }
        issues
    }

    /// Promotes the draft into a new record with a fresh id and timestamp.
    pub fn submit(&self, ctx: &DraftContext) -> Result<Record<K>, Vec<ValidationIssue>> {
        let issues = self.validate(ctx);
        if !issues.is_empty() {
            return Err(issues);
        }

        let fields = K::build(self, ctx)?;
        let title = self
            .value(K::title_field())
            .map(str::to_string)
            .ok_or_else(|| vec![ValidationIssue::missing(K::title_field())])?;
        let category = self
            .value(K::category_field())
            .unwrap_or(&ctx.default_category)
            .to_string();

        Ok(Record::new(Metadata::new(title, category), fields))
    }
}

/// Splits delimiter-separated input into trimmed, non-empty items.
/// Order and duplicates are kept.
pub fn split_list(input: &str, delimiter: char) -> Vec<String> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
