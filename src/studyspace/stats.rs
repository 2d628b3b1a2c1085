//! Quick stats shown under each collection. Always computed over the full
//! collection, never the filtered view.

use crate::kinds::{Document, Material, Note};
use crate::model::{ContentKind, Record};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: String,
}

impl Highlight {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub categories: usize,
    pub highlights: Vec<Highlight>,
}

pub trait QuickStats: ContentKind {
    fn highlights(records: &[Record<Self>]) -> Vec<Highlight>;
}

pub fn summarize<K: QuickStats>(records: &[Record<K>]) -> Summary {
    let categories: BTreeSet<&str> = records
        .iter()
        .map(|r| r.metadata.category.as_str())
        .collect();
    Summary {
        total: records.len(),
        categories: categories.len(),
        highlights: K::highlights(records),
    }
}

impl QuickStats for Note {
    fn highlights(records: &[Record<Self>]) -> Vec<Highlight> {
        let tags: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.fields.tags.iter().map(String::as_str))
            .collect();
        vec![Highlight::new("Tags", tags.len())]
    }
}

impl QuickStats for Document {
    fn highlights(records: &[Record<Self>]) -> Vec<Highlight> {
        let total_kb: f64 = records
            .iter()
            .filter_map(|r| parse_size_kb(&r.fields.size))
            .sum();
        let lecturers: BTreeSet<&str> = records
            .iter()
            .map(|r| r.fields.lecturer.as_str())
            .filter(|l| !l.is_empty())
            .collect();
        vec![
            Highlight::new("Total Size", format_size_kb(total_kb)),
            Highlight::new("Lecturers", lecturers.len()),
        ]
    }
}

impl QuickStats for Material {
    fn highlights(records: &[Record<Self>]) -> Vec<Highlight> {
        let minutes = records
            .iter()
            .filter_map(|r| parse_duration_minutes(&r.fields.estimated_time))
            .fold(0u64, |acc, m| acc.saturating_add(u64::from(m)));
        let starred = records.iter().filter(|r| r.fields.is_starred).count();
        vec![
            Highlight::new("Study Time", format_minutes(minutes)),
            Highlight::new("Starred", starred),
        ]
    }
}

/// Parses labels like "2.4 MB" or "512KB" into kilobytes.
pub fn parse_size_kb(label: &str) -> Option<f64> {
    let label = label.trim();
    let split = label
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(label.len());
    let (number, unit) = label.split_at(split);
    let value: f64 = number.trim().parse().ok()?;
    let factor = match unit.trim().to_uppercase().as_str() {
        "B" => 1.0 / 1024.0,
        "KB" | "K" | "" => 1.0,
        "MB" | "M" => 1024.0,
        "GB" | "G" => 1024.0 * 1024.0,
        _ => return None,
    };
    Some(value * factor)
}

pub fn format_size_kb(kb: f64) -> String {
    if kb >= 1024.0 * 1024.0 {
        format!("{:.1} GB", kb / (1024.0 * 1024.0))
    } else if kb >= 1024.0 {
        format!("{:.1} MB", kb / 1024.0)
    } else {
        format!("{:.0} KB", kb)
    }
}

/// Parses labels like "3h 45m", "45m" or "2h" into minutes. Labels whose
/// total does not fit a `u32` are unparseable.
pub fn parse_duration_minutes(label: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut seen = false;
    for part in label.split_whitespace() {
        let unit = part.chars().last()?;
        let value: u32 = part[..part.len() - unit.len_utf8()].parse().ok()?;
        let minutes = match unit {
            'h' | 'H' => value.checked_mul(60)?,
            'm' | 'M' => value,
            _ => return None,
        };
        total = total.checked_add(minutes)?;
        seen = true;
    }
    seen.then_some(total)
}

pub fn format_minutes(minutes: u64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
