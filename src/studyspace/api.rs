//! # API Facade
//!
//! [`StudySpace`] is the single entry point for every render surface. It owns
//! the three collection controllers and the active [`Section`], and it is
//! the only place that turns the string-typed [`Action`] vocabulary into
//! typed calls.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Normalizes inputs** (field names, type selectors, record ids)
//! - **Dispatches** to the controller of the active section
//! - **Returns structured types** (`Result<CmdResult>`, [`View`])
//!
//! It does no I/O and never formats output for a terminal. Business rules
//! live in the controller, draft, store and filter modules.
//!
//! ## Lifetime
//!
//! All state is process-lifetime. Nothing is loaded at start beyond the
//! optional sample collections, and nothing is saved on exit.

use crate::config::StudyConfig;
use crate::controller::{Controller, SubmitOutcome, ViewModel};
use crate::draft::DraftContext;
use crate::error::{Result, StudyError};
use crate::kinds::{Document, Material, Note};
use crate::model::{ContentKind, Section, Selector};
use crate::seed;
use crate::stats::QuickStats;
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Inputs a render surface can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSection(String),
    SetSearchTerm(String),
    SetCategorySelector(String),
    StartCreate,
    UpdateDraftField { field: String, value: String },
    SubmitDraft,
    CancelDraft,
    DeleteRecord(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CmdResult {
    pub affected: Vec<Uuid>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    pub fn with_affected(mut self, id: Uuid) -> Self {
        self.affected.push(id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTotal {
    pub section: Section,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub section: Section,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub totals: Vec<SectionTotal>,
    pub recent_activity: Vec<Activity>,
}

/// What the active section currently shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum View {
    Dashboard(DashboardView),
    Notes(ViewModel<Note>),
    Materials(ViewModel<Material>),
    Documents(ViewModel<Document>),
}

pub struct StudySpace {
    notes: Controller<Note>,
    materials: Controller<Material>,
    documents: Controller<Document>,
    section: Section,
    recent_limit: usize,
}

impl StudySpace {
    pub fn new(config: &StudyConfig) -> Result<Self> {
        let ctx = DraftContext::from(config);
        let (notes, materials, documents) = if config.seed_samples {
            (
                RecordStore::seeded(seed::notes())?,
                RecordStore::seeded(seed::materials())?,
                RecordStore::seeded(seed::documents())?,
            )
        } else {
            (RecordStore::new(), RecordStore::new(), RecordStore::new())
        };

        tracing::debug!(
            notes = notes.len(),
            materials = materials.len(),
            documents = documents.len(),
            section = %config.initial_section,
            "workspace ready"
        );

        Ok(Self {
            notes: Controller::new(notes, ctx.clone()),
            materials: Controller::new(materials, ctx.clone()),
            documents: Controller::new(documents, ctx),
            section: config.initial_section,
            recent_limit: config.recent_activity_limit,
        })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn notes(&self) -> &Controller<Note> {
        &self.notes
    }

    pub fn materials(&self) -> &Controller<Material> {
        &self.materials
    }

    pub fn documents(&self) -> &Controller<Document> {
        &self.documents
    }

    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        tracing::trace!(?action, section = %self.section, "dispatch");

        if let Action::SetSection(name) = &action {
            self.section = name.parse()?;
            return Ok(CmdResult::default());
        }

        match self.section {
            Section::Dashboard => Err(StudyError::NoActiveCollection(self.section.to_string())),
            Section::Notes => apply(&mut self.notes, action),
            Section::Materials => apply(&mut self.materials, action),
            Section::Documents => apply(&mut self.documents, action),
        }
    }

    pub fn view(&self) -> View {
        match self.section {
            Section::Dashboard => View::Dashboard(self.dashboard()),
            Section::Notes => View::Notes(self.notes.view_model()),
            Section::Materials => View::Materials(self.materials.view_model()),
            Section::Documents => View::Documents(self.documents.view_model()),
        }
    }

    pub fn dashboard(&self) -> DashboardView {
        let totals = vec![
            SectionTotal {
                section: Section::Notes,
                label: "Total Notes",
                count: self.notes.store().len(),
            },
            SectionTotal {
                section: Section::Materials,
                label: "Study Materials",
                count: self.materials.store().len(),
            },
            SectionTotal {
                section: Section::Documents,
                label: "Documents",
                count: self.documents.store().len(),
            },
        ];

        let mut recent_activity: Vec<Activity> = activity(Section::Notes, &self.notes)
            .chain(activity(Section::Materials, &self.materials))
            .chain(activity(Section::Documents, &self.documents))
            .collect();
        recent_activity.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_activity.truncate(self.recent_limit);

        DashboardView {
            totals,
            recent_activity,
        }
    }

    /// Resolves a 1-based position in the active section's visible list to
    /// a record id.
    pub fn resolve_position(&self, position: usize) -> Result<Uuid> {
        let ids: Vec<Uuid> = match self.section {
            Section::Dashboard => {
                return Err(StudyError::NoActiveCollection(self.section.to_string()))
            }
            Section::Notes => visible_ids(&self.notes),
            Section::Materials => visible_ids(&self.materials),
            Section::Documents => visible_ids(&self.documents),
        };
        position
            .checked_sub(1)
            .and_then(|i| ids.get(i).copied())
            .ok_or(StudyError::PositionNotFound(position))
    }
}

fn visible_ids<K: ContentKind>(ctl: &Controller<K>) -> Vec<Uuid> {
    ctl.visible().iter().map(|r| r.id()).collect()
}

fn activity<K: ContentKind>(
    section: Section,
    ctl: &Controller<K>,
) -> impl Iterator<Item = Activity> + '_ {
    ctl.store().all().iter().map(move |r| Activity {
        section,
        title: r.metadata.title.clone(),
        created_at: r.metadata.created_at,
    })
}

fn apply<K: QuickStats>(ctl: &mut Controller<K>, action: Action) -> Result<CmdResult> {
    let result = CmdResult::default();
    match action {
        Action::SetSection(_) => Ok(result),
        Action::SetSearchTerm(term) => {
            ctl.set_search_term(term);
            Ok(result)
        }
        Action::SetCategorySelector(value) => {
            ctl.set_selector(Selector::parse(&value)?);
            Ok(result)
        }
        Action::StartCreate => {
            if ctl.start_create() {
                Ok(result.with_message(CmdMessage::info(format!("Composing a new {}", K::NAME))))
            } else {
                Ok(result.with_message(CmdMessage::info("A draft is already open")))
            }
        }
        Action::UpdateDraftField { field, value } => {
            let field: K::Field = field.parse()?;
            ctl.update_draft_field(field, value)?;
            Ok(result)
        }
        Action::SubmitDraft => match ctl.submit_draft()? {
            SubmitOutcome::Created(record) => Ok(result
                .with_affected(record.id())
                .with_message(CmdMessage::success(format!(
                    "Created {}: {}",
                    K::NAME,
                    record.title()
                )))),
            SubmitOutcome::Rejected(issues) => {
                let mut result = result;
                for issue in issues {
                    result.add_message(CmdMessage::warning(format!("Cannot submit: {}", issue)));
                }
                Ok(result)
            }
        },
        Action::CancelDraft => {
            if ctl.cancel_draft() {
                Ok(result.with_message(CmdMessage::info("Draft discarded")))
            } else {
                Ok(result)
            }
        }
        Action::DeleteRecord(raw) => {
            let id = Uuid::parse_str(raw.trim()).map_err(|_| StudyError::InvalidId(raw))?;
            match ctl.delete_record(id) {
                Some(record) => Ok(result.with_affected(id).with_message(CmdMessage::success(
                    format!("Deleted {}: {}", K::NAME, record.title()),
                ))),
                None => Ok(result),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{DocumentType, MaterialType};

    fn workspace() -> StudySpace {
        StudySpace::new(&StudyConfig::default()).unwrap()
    }

    fn go(ws: &mut StudySpace, section: &str) {
        ws.dispatch(Action::SetSection(section.into())).unwrap();
    }

    #[test]
    fn starts_on_the_configured_section() {
        let ws = workspace();
        assert_eq!(ws.section(), Section::Dashboard);

        let config = StudyConfig {
            initial_section: Section::Notes,
            ..StudyConfig::default()
        };
        let ws = StudySpace::new(&config).unwrap();
        assert!(matches!(ws.view(), View::Notes(_)));
    }

    #[test]
    fn collection_actions_need_a_collection_section() {
        let mut ws = workspace();
        let err = ws.dispatch(Action::StartCreate).unwrap_err();
        assert!(matches!(err, StudyError::NoActiveCollection(_)));
    }

    #[test]
    fn unknown_section_is_an_error() {
        let mut ws = workspace();
        let err = ws.dispatch(Action::SetSection("settings".into())).unwrap_err();
        assert!(matches!(err, StudyError::UnknownSection(_)));
        assert_eq!(ws.section(), Section::Dashboard);
    }

    #[test]
    fn full_create_flow_through_actions() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        ws.dispatch(Action::StartCreate).unwrap();
        for (field, value) in [("title", "X"), ("content", "Y"), ("tags", "a, b ,  , a")] {
            ws.dispatch(Action::UpdateDraftField {
                field: field.into(),
                value: value.into(),
            })
            .unwrap();
        }

        let result = ws.dispatch(Action::SubmitDraft).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let created = ws.notes().store().all()[0].clone();
        assert_eq!(created.id(), result.affected[0]);
        assert_eq!(created.fields.tags, vec!["a", "b", "a"]);
        assert_eq!(created.metadata.category, "General");
        assert!(!ws.notes().is_composing());
    }

    #[test]
    fn rejected_submit_reports_warnings() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        ws.dispatch(Action::StartCreate).unwrap();
        let result = ws.dispatch(Action::SubmitDraft).unwrap();

        assert!(result.affected.is_empty());
        assert_eq!(result.messages.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Warning));
        assert_eq!(ws.notes().store().len(), 3);
    }

    #[test]
    fn unknown_field_is_rejected_for_the_active_kind() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        ws.dispatch(Action::StartCreate).unwrap();
        let err = ws
            .dispatch(Action::UpdateDraftField {
                field: "lecturer".into(),
                value: "Dr. Smith".into(),
            })
            .unwrap_err();
        assert!(matches!(err, StudyError::UnknownField { kind: "note", .. }));

        go(&mut ws, "documents");
        ws.dispatch(Action::StartCreate).unwrap();
        ws.dispatch(Action::UpdateDraftField {
            field: "lecturer".into(),
            value: "Dr. Smith".into(),
        })
        .unwrap();
    }

    #[test]
    fn category_selector_is_parsed_per_kind() {
        let mut ws = workspace();
        go(&mut ws, "documents");
        ws.dispatch(Action::SetCategorySelector("exam".into())).unwrap();

        let View::Documents(vm) = ws.view() else {
            panic!("expected documents view");
        };
        assert_eq!(vm.visible_records.len(), 1);
        assert_eq!(vm.visible_records[0].fields.doc_type, DocumentType::Exam);

        go(&mut ws, "notes");
        let err = ws
            .dispatch(Action::SetCategorySelector("Physics".into()))
            .unwrap_err();
        assert!(matches!(err, StudyError::UnknownType { kind: "note", .. }));
    }

    #[test]
    fn sections_keep_their_own_query() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        ws.dispatch(Action::SetSearchTerm("calc".into())).unwrap();
        go(&mut ws, "materials");
        ws.dispatch(Action::SetSearchTerm("quantum".into())).unwrap();
        go(&mut ws, "notes");

        let View::Notes(vm) = ws.view() else {
            panic!("expected notes view");
        };
        assert_eq!(vm.search_term, "calc");
        assert_eq!(vm.visible_records.len(), 1);
        assert_eq!(ws.materials().query().search_term, "quantum");
    }

    #[test]
    fn delete_by_resolved_position() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        ws.dispatch(Action::SetSearchTerm("organic".into())).unwrap();
        let id = ws.resolve_position(1).unwrap();

        let result = ws.dispatch(Action::DeleteRecord(id.to_string())).unwrap();
        assert_eq!(result.affected, vec![id]);
        assert_eq!(ws.notes().store().len(), 2);

        let again = ws.dispatch(Action::DeleteRecord(id.to_string())).unwrap();
        assert!(again.affected.is_empty());
        assert_eq!(ws.notes().store().len(), 2);
    }

    #[test]
    fn resolve_position_bounds() {
        let mut ws = workspace();
        assert!(matches!(
            ws.resolve_position(1),
            Err(StudyError::NoActiveCollection(_))
        ));
        go(&mut ws, "notes");
        assert!(matches!(
            ws.resolve_position(0),
            Err(StudyError::PositionNotFound(0))
        ));
        assert!(matches!(
            ws.resolve_position(4),
            Err(StudyError::PositionNotFound(4))
        ));
    }

    #[test]
    fn malformed_id_is_an_error() {
        let mut ws = workspace();
        go(&mut ws, "notes");
        let err = ws
            .dispatch(Action::DeleteRecord("not-an-id".into()))
            .unwrap_err();
        assert!(matches!(err, StudyError::InvalidId(_)));
    }

    #[test]
    fn materials_filter_by_plural_type_name() {
        let mut ws = workspace();
        go(&mut ws, "materials");
        ws.dispatch(Action::SetCategorySelector("books".into())).unwrap();

        let View::Materials(vm) = ws.view() else {
            panic!("expected materials view");
        };
        assert_eq!(vm.category_selector, Selector::Only(MaterialType::Book));
        assert_eq!(vm.visible_records.len(), 1);
        assert_eq!(vm.visible_records[0].title(), "Chemistry Lab Manual");
    }

    #[test]
    fn oversized_study_times_do_not_break_the_view() {
        let mut ws = workspace();
        go(&mut ws, "materials");
        for (title, time) in [
            ("Endless", "99999999h"),
            ("Long A", "4000000000m"),
            ("Long B", "4000000000m"),
        ] {
            ws.dispatch(Action::StartCreate).unwrap();
            for (field, value) in [("title", title), ("time", time)] {
                ws.dispatch(Action::UpdateDraftField {
                    field: field.into(),
                    value: value.into(),
                })
                .unwrap();
            }
            ws.dispatch(Action::SubmitDraft).unwrap();
        }

        let View::Materials(vm) = ws.view() else {
            panic!("expected materials view");
        };
        assert_eq!(vm.stats.total, 7);
        let study_time = vm
            .stats
            .highlights
            .iter()
            .find(|h| h.label == "Study Time")
            .unwrap();
        // 495 sample minutes plus two 4e9 minute labels; the 99999999h label is unparseable
        assert_eq!(study_time.value, "133333341h 35m");
    }

    #[test]
    fn dashboard_lists_totals_and_recent_activity() {
        let ws = workspace();
        let View::Dashboard(dash) = ws.view() else {
            panic!("expected dashboard");
        };
        let counts: Vec<usize> = dash.totals.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![3, 4, 4]);

        assert_eq!(dash.recent_activity.len(), 4);
        assert!(dash
            .recent_activity
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn new_records_lead_recent_activity() {
        let mut ws = workspace();
        go(&mut ws, "materials");
        ws.dispatch(Action::StartCreate).unwrap();
        ws.dispatch(Action::UpdateDraftField {
            field: "title".into(),
            value: "Feynman Lectures".into(),
        })
        .unwrap();
        ws.dispatch(Action::SubmitDraft).unwrap();

        let dash = ws.dashboard();
        assert_eq!(dash.recent_activity[0].title, "Feynman Lectures");
        assert_eq!(dash.recent_activity[0].section, Section::Materials);
    }

    #[test]
    fn empty_workspace_without_samples() {
        let config = StudyConfig {
            seed_samples: false,
            ..StudyConfig::default()
        };
        let ws = StudySpace::new(&config).unwrap();
        let dash = ws.dashboard();
        assert!(dash.totals.iter().all(|t| t.count == 0));
        assert!(dash.recent_activity.is_empty());
    }

    #[test]
    fn view_serializes_with_section_tag() {
        let mut ws = workspace();
        go(&mut ws, "documents");
        let json = serde_json::to_value(ws.view()).unwrap();
        assert_eq!(json["section"], "documents");
        assert_eq!(json["kind"], "document");
        assert_eq!(json["visible_records"][3]["type"], "exam");
    }
}
