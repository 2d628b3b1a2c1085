//! # Record Store
//!
//! [`RecordStore`] is the exclusive owner of one ordered collection of
//! records of a single kind. It lives for as long as the workspace does and
//! is never loaded from or written to disk.
//!
//! ## Ordering
//!
//! New records are prepended, so user-created records read newest first.
//! Records passed to [`RecordStore::seeded`] keep the order they were given
//! in, behind anything inserted later.
//!
//! ## Identity
//!
//! Ids are generated when a draft is submitted, never supplied by the user.
//! Inserting an id that is already present is a generator defect and is
//! reported as [`StudyError::DuplicateId`]; the existing record is never
//! overwritten. Removing an absent id is a no-op.

use crate::error::{Result, StudyError};
use crate::model::{ContentKind, Record};
use std::fmt;
use uuid::Uuid;

type Observer<K> = Box<dyn FnMut(&[Record<K>])>;

pub struct RecordStore<K: ContentKind> {
    records: Vec<Record<K>>,
    observers: Vec<Observer<K>>,
}

impl<K: ContentKind> Default for RecordStore<K> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl<K: ContentKind> fmt::Debug for RecordStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("kind", &K::NAME)
            .field("records", &self.records)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<K: ContentKind> RecordStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `records` in the given order.
    pub fn seeded(records: Vec<Record<K>>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            if store.contains(record.id()) {
                return Err(StudyError::DuplicateId(record.id()));
            }
            store.records.push(record);
        }
        Ok(store)
    }

    pub fn insert(&mut self, record: Record<K>) -> Result<()> {
        let id = record.id();
        if self.contains(id) {
            tracing::error!(kind = K::NAME, %id, "refusing to insert duplicate record id");
            return Err(StudyError::DuplicateId(id));
        }

        tracing::debug!(kind = K::NAME, %id, title = record.title(), "record inserted");
        self.records.insert(0, record);
        self.notify();
        Ok(())
    }

    /// Removes the record with `id`, returning it. Absent ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> Option<Record<K>> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(position);
        tracing::debug!(kind = K::NAME, %id, "record removed");
        self.notify();
        Some(removed)
    }

    pub fn all(&self) -> &[Record<K>] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&Record<K>> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers a callback that receives the full snapshot after every
    /// effective mutation.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Record<K>]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.records);
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::kinds::{Document, DocumentFields, DocumentType, Note, NoteFields};
    use crate::model::Metadata;

    pub fn note(title: &str, subject: &str, content: &str) -> Record<Note> {
        Record::new(
            Metadata::new(title.to_string(), subject.to_string()),
            NoteFields {
                content: content.to_string(),
                tags: Vec::new(),
            },
        )
    }

    pub fn document(name: &str, doc_type: DocumentType) -> Record<Document> {
        Record::new(
            Metadata::new(name.to_string(), "General".to_string()),
            DocumentFields {
                doc_type,
                lecturer: "Dr. Smith".to_string(),
                size: "1.0 MB".to_string(),
            },
        )
    }

    pub struct StoreFixture<K: ContentKind> {
        pub store: RecordStore<K>,
    }

    impl<K: ContentKind> Default for StoreFixture<K> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<K: ContentKind> StoreFixture<K> {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        pub fn with(mut self, record: Record<K>) -> Self {
            self.store.insert(record).unwrap();
            self
        }
    }

    impl StoreFixture<Note> {
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = note(
                    &format!("Test Note {}", i + 1),
                    "General",
                    &format!("Content for note {}", i + 1),
                );
                self.store.insert(record).unwrap();
            }
            self
        }
    }
}
