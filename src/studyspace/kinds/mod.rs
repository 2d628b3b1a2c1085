//! # Content Kinds
//!
//! The three record families of the dashboard. Each one is a zero-sized
//! marker implementing [`ContentKind`](crate::model::ContentKind):
//!
//! | Kind         | Title field | Required         | Type vocabulary                        |
//! |--------------|-------------|------------------|----------------------------------------|
//! | [`Note`]     | `title`     | title, content   | none                                   |
//! | [`Document`] | `name`      | name             | lecture, assignment, reference, exam   |
//! | [`Material`] | `title`     | title            | video, article, link, book             |

pub mod document;
pub mod material;
pub mod note;

pub use document::{Document, DocumentField, DocumentFields, DocumentType};
pub use material::{Difficulty, Material, MaterialField, MaterialFields, MaterialType};
pub use note::{Note, NoteField, NoteFields, NoteType};
