use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Record id already present: {0}")]
    DuplicateId(Uuid),

    #[error("Unknown {kind} field: {field}")]
    UnknownField { kind: &'static str, field: String },

    #[error("Unknown {kind} type: {value}")]
    UnknownType { kind: &'static str, value: String },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("No record at position {0}")]
    PositionNotFound(usize),

    #[error("No draft is open")]
    NoDraftOpen,

    #[error("The {0} section has no collection")]
    NoActiveCollection(String),

    #[error("{0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;
