//! # View Controller
//!
//! A [`Controller`] coordinates one collection: its [`RecordStore`], the
//! current [`Query`], and the draft state machine.
//!
//! ```text
//!            start_create
//!   Idle ─────────────────────▶ Composing(draft)
//!    ▲                              │
//!    │   submit (accepted) / cancel │
//!    └──────────────────────────────┘
//! ```
//!
//! A rejected submit keeps the controller in `Composing` with the draft
//! untouched. There is no intermediate saving state: once a draft
//! validates, the insert happens synchronously.

use crate::draft::{Draft, DraftContext, ValidationIssue};
use crate::error::{Result, StudyError};
use crate::filter::{self, Query};
use crate::model::{ContentKind, Record, Selector};
use crate::stats::{self, QuickStats, Summary};
use crate::store::RecordStore;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode<K: ContentKind> {
    Idle,
    Composing(Draft<K>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<K: ContentKind> {
    Created(Record<K>),
    Rejected(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftEntry {
    pub field: String,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftState {
    pub fields: Vec<DraftEntry>,
    pub can_submit: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Read-only snapshot handed to the render surface.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ViewModel<K: ContentKind> {
    pub kind: &'static str,
    pub visible_records: Vec<Record<K>>,
    pub search_term: String,
    pub category_selector: Selector<K::Type>,
    pub selector_options: Vec<String>,
    pub is_draft_open: bool,
    pub draft_state: Option<DraftState>,
    pub stats: Summary,
}

#[derive(Debug)]
pub struct Controller<K: ContentKind> {
    store: RecordStore<K>,
    query: Query<K>,
    mode: Mode<K>,
    ctx: DraftContext,
}

impl<K: ContentKind> Controller<K> {
    pub fn new(store: RecordStore<K>, ctx: DraftContext) -> Self {
        Self {
            store,
            query: Query::default(),
            mode: Mode::Idle,
            ctx,
        }
    }

    pub fn store(&self) -> &RecordStore<K> {
        &self.store
    }

    pub fn query(&self) -> &Query<K> {
        &self.query
    }

    pub fn mode(&self) -> &Mode<K> {
        &self.mode
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.mode, Mode::Composing(_))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_selector(&mut self, selector: Selector<K::Type>) {
        self.query.selector = selector;
    }

    /// Opens an empty draft. Returns `false` if one was already open, in
    /// which case it is kept as is.
    pub fn start_create(&mut self) -> bool {
        if self.is_composing() {
            return false;
        }
        self.mode = Mode::Composing(Draft::new());
        true
    }

    pub fn update_draft_field(&mut self, field: K::Field, value: impl Into<String>) -> Result<()> {
        match &mut self.mode {
            Mode::Composing(draft) => {
                draft.update(field, value);
                Ok(())
            }
            Mode::Idle => Err(StudyError::NoDraftOpen),
        }
    }

    pub fn submit_draft(&mut self) -> Result<SubmitOutcome<K>> {
        let Mode::Composing(draft) = &self.mode else {
            return Err(StudyError::NoDraftOpen);
        };

        let record = match draft.submit(&self.ctx) {
            Ok(record) => record,
            Err(issues) => {
                tracing::debug!(kind = K::NAME, issues = issues.len(), "draft rejected");
                return Ok(SubmitOutcome::Rejected(issues));
            }
        };

        self.store.insert(record.clone())?;
        self.mode = Mode::Idle;
        Ok(SubmitOutcome::Created(record))
    }

    /// Discards the open draft. Returns `false` if there was none.
    pub fn cancel_draft(&mut self) -> bool {
        let was_composing = self.is_composing();
        self.mode = Mode::Idle;
        was_composing
    }

    pub fn delete_record(&mut self, id: Uuid) -> Option<Record<K>> {
        self.store.remove(id)
    }

    pub fn visible(&self) -> Vec<Record<K>> {
        filter::apply(self.store.all(), &self.query)
    }

    fn draft_state(&self) -> Option<DraftState> {
        let Mode::Composing(draft) = &self.mode else {
            return None;
        };
        let issues = draft.validate(&self.ctx);
        let fields = draft
            .entries()
            .into_iter()
            .map(|(field, value)| DraftEntry {
                field: field.to_string(),
                value: value.to_string(),
                required: K::required().contains(&field),
            })
            .collect();
        Some(DraftState {
            fields,
            can_submit: issues.is_empty(),
            issues,
        })
    }
}

impl<K: QuickStats> Controller<K> {
    pub fn summary(&self) -> Summary {
        stats::summarize(self.store.all())
    }

    pub fn view_model(&self) -> ViewModel<K> {
        let selector_options = std::iter::once("all".to_string())
            .chain(K::types().iter().map(|t| t.to_string()))
            .collect();

        ViewModel {
            kind: K::NAME,
            visible_records: self.visible(),
            search_term: self.query.search_term.clone(),
            category_selector: self.query.selector,
            selector_options,
            is_draft_open: self.is_composing(),
            draft_state: self.draft_state(),
            stats: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Document, DocumentType, Note, NoteField};
    use crate::seed;

    fn notes() -> Controller<Note> {
        Controller::new(
            RecordStore::seeded(seed::notes()).unwrap(),
            DraftContext::default(),
        )
    }

    #[test]
    fn starts_idle_with_everything_visible() {
        let ctl = notes();
        let vm = ctl.view_model();
        assert!(!vm.is_draft_open);
        assert!(vm.draft_state.is_none());
        assert_eq!(vm.visible_records.len(), 3);
        assert_eq!(vm.selector_options, vec!["all"]);
    }

    #[test]
    fn search_updates_visible_records() {
        let mut ctl = notes();
        ctl.set_search_term("calc");
        let vm = ctl.view_model();
        assert_eq!(vm.search_term, "calc");
        assert_eq!(vm.visible_records.len(), 1);
        assert_eq!(vm.visible_records[0].title(), "Calculus Integration");
        assert_eq!(vm.stats.total, 3);
    }

    #[test]
    fn successful_submit_inserts_and_returns_to_idle() {
        let mut ctl = notes();
        assert!(ctl.start_create());
        ctl.update_draft_field(NoteField::Title, "Thermodynamics").unwrap();
        ctl.update_draft_field(NoteField::Content, "Entropy increases").unwrap();

        let outcome = ctl.submit_draft().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Created(ref r) if r.title() == "Thermodynamics"));
        assert_eq!(ctl.store().len(), 4);
        assert_eq!(ctl.store().all()[0].title(), "Thermodynamics");
        assert_eq!(*ctl.mode(), Mode::Idle);
    }

    #[test]
    fn rejected_submit_stays_composing_and_keeps_store() {
        let mut ctl = notes();
        ctl.start_create();
        ctl.update_draft_field(NoteField::Content, "No title").unwrap();

        let outcome = ctl.submit_draft().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![ValidationIssue::missing("title")])
        );
        assert_eq!(ctl.store().len(), 3);

        let vm = ctl.view_model();
        assert!(vm.is_draft_open);
        let state = vm.draft_state.unwrap();
        assert!(!state.can_submit);
        assert_eq!(
            state.fields.iter().find(|e| e.field == "content").unwrap().value,
            "No title"
        );
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut ctl = notes();
        ctl.start_create();
        ctl.update_draft_field(NoteField::Title, "Half done").unwrap();
        assert!(ctl.cancel_draft());
        assert!(!ctl.cancel_draft());

        ctl.start_create();
        let Mode::Composing(draft) = ctl.mode() else {
            panic!("expected composing");
        };
        assert_eq!(draft.get(NoteField::Title), "");
        assert_eq!(ctl.store().len(), 3);
    }

    #[test]
    fn start_create_keeps_an_open_draft() {
        let mut ctl = notes();
        ctl.start_create();
        ctl.update_draft_field(NoteField::Title, "Keep me").unwrap();
        assert!(!ctl.start_create());
        let Mode::Composing(draft) = ctl.mode() else {
            panic!("expected composing");
        };
        assert_eq!(draft.get(NoteField::Title), "Keep me");
    }

    #[test]
    fn draft_actions_require_an_open_draft() {
        let mut ctl = notes();
        assert!(matches!(
            ctl.update_draft_field(NoteField::Title, "x"),
            Err(StudyError::NoDraftOpen)
        ));
        assert!(matches!(ctl.submit_draft(), Err(StudyError::NoDraftOpen)));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut ctl = notes();
        let id = ctl.store().all()[0].id();
        assert!(ctl.delete_record(id).is_some());
        assert!(ctl.delete_record(id).is_none());
        assert_eq!(ctl.store().len(), 2);
    }

    #[test]
    fn document_selector_filters_by_type() {
        let mut ctl = Controller::<Document>::new(
            RecordStore::seeded(seed::documents()).unwrap(),
            DraftContext::default(),
        );
        ctl.set_selector(Selector::Only(DocumentType::Exam));
        let vm = ctl.view_model();
        assert_eq!(vm.visible_records.len(), 1);
        assert_eq!(vm.visible_records[0].fields.doc_type, DocumentType::Exam);
        assert_eq!(
            vm.selector_options,
            vec!["all", "lecture", "assignment", "reference", "exam"]
        );
    }

    #[test]
    fn view_model_serializes_for_the_render_surface() {
        let mut ctl = notes();
        ctl.start_create();
        let json = serde_json::to_value(ctl.view_model()).unwrap();
        assert_eq!(json["kind"], "note");
        assert_eq!(json["category_selector"], "all");
        assert_eq!(json["is_draft_open"], true);
        assert_eq!(json["visible_records"][0]["title"], "Quantum Mechanics Basics");
        assert_eq!(json["visible_records"][0]["tags"][0], "quantum");
    }
}
