use crate::draft::{split_list, Draft, DraftContext, ValidationIssue};
use crate::error::{Result, StudyError};
use crate::model::{ContentKind, Metadata};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteFields {
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteField {
    Title,
    Subject,
    Tags,
    Content,
}

/// Notes have no type vocabulary, so the only expressible selector is `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoteType {}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteField::Title => "title",
            NoteField::Subject => "subject",
            NoteField::Tags => "tags",
            NoteField::Content => "content",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for NoteField {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(NoteField::Title),
            "subject" | "category" => Ok(NoteField::Subject),
            "tags" => Ok(NoteField::Tags),
            "content" | "body" => Ok(NoteField::Content),
            other => Err(StudyError::UnknownField {
                kind: Note::NAME,
                field: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl FromStr for NoteType {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        Err(StudyError::UnknownType {
            kind: Note::NAME,
            value: s.to_string(),
        })
    }
}

impl ContentKind for Note {
    const NAME: &'static str = "note";

    type Field = NoteField;
    type Type = NoteType;
    type Fields = NoteFields;

    fn fields() -> &'static [NoteField] {
        &[
            NoteField::Title,
            NoteField::Subject,
            NoteField::Tags,
            NoteField::Content,
        ]
    }

    fn title_field() -> NoteField {
        NoteField::Title
    }

    fn category_field() -> NoteField {
        NoteField::Subject
    }

    fn required() -> &'static [NoteField] {
        &[NoteField::Title, NoteField::Content]
    }

    fn types() -> &'static [NoteType] {
        &[]
    }

    fn build(
        draft: &Draft<Self>,
        ctx: &DraftContext,
    ) -> std::result::Result<NoteFields, Vec<ValidationIssue>> {
        Ok(NoteFields {
            content: draft.get(NoteField::Content).to_string(),
            tags: split_list(draft.get(NoteField::Tags), ctx.tag_delimiter),
        })
    }

    fn record_type(_fields: &NoteFields) -> Option<NoteType> {
        None
    }

    fn search_text<'a>(metadata: &'a Metadata, fields: &'a NoteFields) -> Vec<&'a str> {
        vec![&metadata.title, &fields.content, &metadata.category]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_display() {
        for field in Note::fields() {
            assert_eq!(field.to_string().parse::<NoteField>().unwrap(), *field);
        }
    }

    #[test]
    fn category_alias_maps_to_subject() {
        assert_eq!("category".parse::<NoteField>().unwrap(), NoteField::Subject);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "lecturer".parse::<NoteField>().unwrap_err();
        assert!(matches!(err, StudyError::UnknownField { kind: "note", .. }));
    }

    #[test]
    fn searches_title_content_and_subject() {
        let meta = Metadata::new("Title".into(), "Physics".into());
        let fields = NoteFields {
            content: "Body".into(),
            tags: vec!["hidden".into()],
        };
        let text = Note::search_text(&meta, &fields);
        assert_eq!(text, vec!["Title", "Body", "Physics"]);
    }
}
