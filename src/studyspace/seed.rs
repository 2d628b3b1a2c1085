//! Sample collections the dashboard starts with.

use crate::kinds::{
    Difficulty, Document, DocumentFields, DocumentType, Material, MaterialFields, MaterialType,
    Note, NoteFields,
};
use crate::model::{Metadata, Record};
use chrono::{DateTime, TimeZone, Utc};

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub fn notes() -> Vec<Record<Note>> {
    vec![
        Record::<Note>::new(
            Metadata::at(
                "Quantum Mechanics Basics".into(),
                "Physics".into(),
                day(2024, 1, 15),
            ),
            NoteFields {
                content: "Wave-particle duality is a fundamental concept...".into(),
                tags: tags(&["quantum", "physics", "fundamentals"]),
            },
        ),
        Record::<Note>::new(
            Metadata::at(
                "Calculus Integration".into(),
                "Mathematics".into(),
                day(2024, 1, 14),
            ),
            NoteFields {
                content: "Integration by parts formula: ∫u dv = uv - ∫v du...".into(),
                tags: tags(&["calculus", "integration", "math"]),
            },
        ),
        Record::<Note>::new(
            Metadata::at(
                "Organic Chemistry Reactions".into(),
                "Chemistry".into(),
                day(2024, 1, 13),
            ),
            NoteFields {
                content: "SN1 and SN2 reactions differ in their mechanisms...".into(),
                tags: tags(&["organic", "reactions", "mechanisms"]),
            },
        ),
    ]
}

pub fn documents() -> Vec<Record<Document>> {
    let doc = |name: &str,
               lecturer: &str,
               subject: &str,
               date: DateTime<Utc>,
               size: &str,
               doc_type: DocumentType| {
        Record::<Document>::new(
            Metadata::at(name.into(), subject.into(), date),
            DocumentFields {
                doc_type,
                lecturer: lecturer.into(),
                size: size.into(),
            },
        )
    };

    vec![
        doc(
            "Quantum Mechanics Lecture 5.pdf",
            "Dr. Smith",
            "Physics",
            day(2024, 1, 15),
            "2.4 MB",
            DocumentType::Lecture,
        ),
        doc(
            "Calculus Assignment 3.pdf",
            "Prof. Johnson",
            "Mathematics",
            day(2024, 1, 14),
            "1.8 MB",
            DocumentType::Assignment,
        ),
        doc(
            "Organic Chemistry Reference.pdf",
            "Dr. Williams",
            "Chemistry",
            day(2024, 1, 13),
            "5.2 MB",
            DocumentType::Reference,
        ),
        doc(
            "Midterm Exam Guide.pdf",
            "Prof. Davis",
            "Computer Science",
            day(2024, 1, 12),
            "3.1 MB",
            DocumentType::Exam,
        ),
    ]
}

pub fn materials() -> Vec<Record<Material>> {
    vec![
        Record::<Material>::new(
            Metadata::at(
                "Linear Algebra Video Series".into(),
                "Mathematics".into(),
                day(2024, 1, 11),
            ),
            MaterialFields {
                material_type: MaterialType::Video,
                description: "Comprehensive video series covering linear algebra fundamentals including vectors, matrices, and transformations.".into(),
                url: Some("https://example.com".into()),
                estimated_time: "3h 45m".into(),
                difficulty: Difficulty::Intermediate,
                is_starred: true,
            },
        ),
        Record::<Material>::new(
            Metadata::at(
                "Quantum Physics Research Paper".into(),
                "Physics".into(),
                day(2024, 1, 10),
            ),
            MaterialFields {
                material_type: MaterialType::Article,
                description: "Recent research on quantum entanglement and its applications in quantum computing.".into(),
                url: None,
                estimated_time: "45m".into(),
                difficulty: Difficulty::Advanced,
                is_starred: false,
            },
        ),
        Record::<Material>::new(
            Metadata::at(
                "Chemistry Lab Manual".into(),
                "Chemistry".into(),
                day(2024, 1, 9),
            ),
            MaterialFields {
                material_type: MaterialType::Book,
                description: "Complete laboratory manual with experiments and safety procedures for organic chemistry.".into(),
                url: None,
                estimated_time: "2h 30m".into(),
                difficulty: Difficulty::Beginner,
                is_starred: true,
            },
        ),
        Record::<Material>::new(
            Metadata::at(
                "Programming Concepts Tutorial".into(),
                "Computer Science".into(),
                day(2024, 1, 8),
            ),
            MaterialFields {
                material_type: MaterialType::Link,
                description: "Interactive tutorial covering object-oriented programming principles and design patterns.".into(),
                url: Some("https://example.com".into()),
                estimated_time: "1h 15m".into(),
                difficulty: Difficulty::Intermediate,
                is_starred: false,
            },
        ),
    ]
}
