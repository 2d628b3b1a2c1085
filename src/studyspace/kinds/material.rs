use crate::draft::{Draft, DraftContext, ValidationIssue};
use crate::error::{Result, StudyError};
use crate::model::{ContentKind, Metadata};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A curated study-material reference (video, article, link or book).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Video,
    Article,
    Link,
    Book,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialFields {
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub description: String,
    pub url: Option<String>,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub is_starred: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaterialField {
    Title,
    Type,
    Subject,
    Description,
    Url,
    EstimatedTime,
    Difficulty,
    Starred,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Video,
        MaterialType::Article,
        MaterialType::Link,
        MaterialType::Book,
    ];
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialType::Video => "video",
            MaterialType::Article => "article",
            MaterialType::Link => "link",
            MaterialType::Book => "book",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MaterialType {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" | "videos" => Ok(MaterialType::Video),
            "article" | "articles" => Ok(MaterialType::Article),
            "link" | "links" => Ok(MaterialType::Link),
            "book" | "books" => Ok(MaterialType::Book),
            other => Err(StudyError::UnknownType {
                kind: Material::NAME,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(StudyError::UnknownType {
                kind: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MaterialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialField::Title => "title",
            MaterialField::Type => "type",
            MaterialField::Subject => "subject",
            MaterialField::Description => "description",
            MaterialField::Url => "url",
            MaterialField::EstimatedTime => "time",
            MaterialField::Difficulty => "difficulty",
            MaterialField::Starred => "starred",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MaterialField {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(MaterialField::Title),
            "type" => Ok(MaterialField::Type),
            "subject" | "category" => Ok(MaterialField::Subject),
            "description" => Ok(MaterialField::Description),
            "url" => Ok(MaterialField::Url),
            "time" | "estimated_time" | "estimated-time" => Ok(MaterialField::EstimatedTime),
            "difficulty" => Ok(MaterialField::Difficulty),
            "starred" | "star" => Ok(MaterialField::Starred),
            other => Err(StudyError::UnknownField {
                kind: Material::NAME,
                field: other.to_string(),
            }),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "starred" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

impl ContentKind for Material {
    const NAME: &'static str = "material";

    type Field = MaterialField;
    type Type = MaterialType;
    type Fields = MaterialFields;

    fn fields() -> &'static [MaterialField] {
        &[
            MaterialField::Title,
            MaterialField::Type,
            MaterialField::Subject,
            MaterialField::Description,
            MaterialField::Url,
            MaterialField::EstimatedTime,
            MaterialField::Difficulty,
            MaterialField::Starred,
        ]
    }

    fn title_field() -> MaterialField {
        MaterialField::Title
    }

    fn category_field() -> MaterialField {
        MaterialField::Subject
    }

    fn required() -> &'static [MaterialField] {
        &[MaterialField::Title]
    }

    fn types() -> &'static [MaterialType] {
        &MaterialType::ALL
    }

    fn build(
        draft: &Draft<Self>,
        _ctx: &DraftContext,
    ) -> std::result::Result<MaterialFields, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let material_type = match draft.value(MaterialField::Type) {
            None => Some(MaterialType::Link),
            Some(raw) => raw.parse().ok().or_else(|| {
                issues.push(ValidationIssue::invalid(MaterialField::Type, raw));
                None
            }),
        };
        let difficulty = match draft.value(MaterialField::Difficulty) {
            None => Some(Difficulty::Beginner),
            Some(raw) => match raw.parse::<Difficulty>() {
                Ok(difficulty) => Some(difficulty),
                Err(_) => {
                    issues.push(ValidationIssue::invalid(MaterialField::Difficulty, raw));
                    None
                }
            },
        };
        let is_starred = match draft.value(MaterialField::Starred) {
            None => Some(false),
            Some(raw) => parse_flag(raw).or_else(|| {
                issues.push(ValidationIssue::invalid(MaterialField::Starred, raw));
                None
            }),
        };

        match (material_type, difficulty, is_starred) {
            (Some(material_type), Some(difficulty), Some(is_starred)) => Ok(MaterialFields {
                material_type,
                description: draft
                    .value(MaterialField::Description)
                    .unwrap_or("")
                    .to_string(),
                url: draft.value(MaterialField::Url).map(str::to_string),
                estimated_time: draft
                    .value(MaterialField::EstimatedTime)
                    .unwrap_or("")
                    .to_string(),
                difficulty,
                is_starred,
            }),
            _ => Err(issues),
        }
    }

    fn record_type(fields: &MaterialFields) -> Option<MaterialType> {
        Some(fields.material_type)
    }

    /// Title and description, plus the subject so a material can be found
    /// by course the same way notes and documents can.
    fn search_text<'a>(metadata: &'a Metadata, fields: &'a MaterialFields) -> Vec<&'a str> {
        vec![&metadata.title, &fields.description, &metadata.category]
    }
}
