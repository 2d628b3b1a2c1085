//! # Studyspace Architecture
//!
//! Studyspace is a **UI-agnostic study dashboard library**: notes, study
//! materials and a PDF library, each a searchable, filterable collection with
//! a create form. The terminal client in `cli/` is one way to drive it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads action lines, renders view models                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - StudySpace facade, one controller per collection         │
//! │  - Normalizes inputs (field names, selectors, ids)          │
//! │  - Returns CmdResult and View values                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller Layer (controller.rs)                           │
//! │  - Query + draft state machine over one store               │
//! │  - Builds the serializable ViewModel                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, filter.rs, draft.rs, stats.rs)             │
//! │  - Generic over ContentKind, no I/O                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Implementation, Three Kinds
//!
//! Every collection component is written once against the
//! [`model::ContentKind`] trait. A kind supplies its field vocabulary, its
//! type vocabulary for the category selector, how a draft becomes typed
//! fields, and which texts search looks at. See [`kinds`] for the three
//! implementations.
//!
//! ## State
//!
//! All records live in memory for the life of the process. Only
//! [`config::StudyConfig`] is read from disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and the action vocabulary
//! - [`controller`]: Per-collection view controller
//! - [`store`]: Ordered in-memory record store
//! - [`filter`]: Search term and type selector
//! - [`draft`]: Create form values and validation
//! - [`stats`]: Quick stats per collection
//! - [`model`]: `Record`, `Metadata`, `Selector`, `Section` and the `ContentKind` trait
//! - [`kinds`]: Notes, documents and materials
//! - [`seed`]: Sample collections
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod filter;
pub mod kinds;
pub mod model;
pub mod seed;
pub mod stats;
pub mod store;
