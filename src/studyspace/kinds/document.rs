use crate::draft::{Draft, DraftContext, ValidationIssue};
use crate::error::{Result, StudyError};
use crate::model::{ContentKind, Metadata};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An uploaded document in the PDF library. Only its descriptive
/// metadata is tracked; the file itself is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Lecture,
    Assignment,
    Reference,
    Exam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFields {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub lecturer: String,
    pub size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentField {
    Name,
    Lecturer,
    Subject,
    Type,
    Size,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Lecture,
        DocumentType::Assignment,
        DocumentType::Reference,
        DocumentType::Exam,
    ];
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::Lecture => "lecture",
            DocumentType::Assignment => "assignment",
            DocumentType::Reference => "reference",
            DocumentType::Exam => "exam",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DocumentType {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lecture" | "lectures" => Ok(DocumentType::Lecture),
            "assignment" | "assignments" => Ok(DocumentType::Assignment),
            "reference" | "references" => Ok(DocumentType::Reference),
            "exam" | "exams" => Ok(DocumentType::Exam),
            other => Err(StudyError::UnknownType {
                kind: Document::NAME,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentField::Name => "name",
            DocumentField::Lecturer => "lecturer",
            DocumentField::Subject => "subject",
            DocumentField::Type => "type",
            DocumentField::Size => "size",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DocumentField {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "title" => Ok(DocumentField::Name),
            "lecturer" => Ok(DocumentField::Lecturer),
            "subject" | "category" => Ok(DocumentField::Subject),
            "type" => Ok(DocumentField::Type),
            "size" => Ok(DocumentField::Size),
            other => Err(StudyError::UnknownField {
                kind: Document::NAME,
                field: other.to_string(),
            }),
        }
    }
}

impl ContentKind for Document {
    const NAME: &'static str = "document";

    type Field = DocumentField;
    type Type = DocumentType;
    type Fields = DocumentFields;

    fn fields() -> &'static [DocumentField] {
        &[
            DocumentField::Name,
            DocumentField::Lecturer,
            DocumentField::Subject,
            DocumentField::Type,
            DocumentField::Size,
        ]
    }

    fn title_field() -> DocumentField {
        DocumentField::Name
    }

    fn category_field() -> DocumentField {
        DocumentField::Subject
    }

    fn required() -> &'static [DocumentField] {
        &[DocumentField::Name]
    }

    fn types() -> &'static [DocumentType] {
        &DocumentType::ALL
    }

    fn build(
        draft: &Draft<Self>,
        _ctx: &DraftContext,
    ) -> std::result::Result<DocumentFields, Vec<ValidationIssue>> {
        // A blank type means "lecture", the first tab of the library.
        let doc_type = match draft.value(DocumentField::Type) {
            None => DocumentType::Lecture,
            Some(raw) => raw
                .parse()
                .map_err(|_| vec![ValidationIssue::invalid(DocumentField::Type, raw)])?,
        };

        Ok(DocumentFields {
            doc_type,
            lecturer: draft.value(DocumentField::Lecturer).unwrap_or("").to_string(),
            size: draft.value(DocumentField::Size).unwrap_or("").to_string(),
        })
    }

    fn record_type(fields: &DocumentFields) -> Option<DocumentType> {
        Some(fields.doc_type)
    }

    fn search_text<'a>(metadata: &'a Metadata, fields: &'a DocumentFields) -> Vec<&'a str> {
        vec![&metadata.title, &fields.lecturer, &metadata.category]
    }
}
