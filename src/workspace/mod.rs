//! The workspace state manager.
//!
//! A [`Workspace`] owns every mutable collection of the technician
//! workspace: cases, the team board, urgent actions, the coordination
//! calendar, per-project checklists and approvals, the report desk, and
//! the journey islands. There is no persistence layer: state lives for
//! the process lifetime and every run starts from the embedded demo seed.
//!
//! All operations are synchronous and run to completion; derived views
//! (filtered lists, counts, progress) are recomputed from current state on
//! every read. Collections are small (tens of items), so no indexing is
//! needed.

pub mod calendar;
pub mod checklist;
pub mod filter;
pub mod journey;
pub mod metrics;
pub mod reports;
pub mod seed;

use std::collections::HashMap;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::models::{
    build_due_label, ActionItem, ApprovalState, BoardItem, BoardStatus, Case, CaseFilter,
    CaseStage, Channel, Project, QuickNote, StageBucket, TeamStream,
};
use crate::{Error, Result};

pub use calendar::CalendarBoard;
pub use checklist::ChecklistRegistry;
pub use filter::ReportFilter;
pub use journey::JourneyBoard;
pub use reports::{ReportDesk, ReportDraft};

/// Generate a unique ID for a workspace entity.
///
/// Format: `<prefix>-<4 hex chars>`, hashed from the seed text and the
/// current timestamp so repeated creations with the same title still get
/// distinct ids.
pub fn generate_id(prefix: &str, seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(0)
            .to_le_bytes(),
    );
    let hash = hasher.finalize();
    let hash_hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hash_hex[..4])
}

/// Synthesize a display reference (e.g., "UTN-2113") in the given numeric
/// range, derived from the same hash source as [`generate_id`].
pub fn synthesize_ref(seed: &str, base: u32, span: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(0)
            .to_le_bytes(),
    );
    let hash = hasher.finalize();
    let n = u32::from_le_bytes([hash[0], hash[1], hash[2], hash[3]]);
    format!("UTN-{}", base + n % span.max(1))
}

/// In-memory state for one technician workspace session.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Cases moving through the field workflow
    pub cases: Vec<Case>,
    /// Items on the shared team board
    pub board: Vec<BoardItem>,
    /// Urgent actions; removed on completion
    pub actions: Vec<ActionItem>,
    /// Long-running team streams (overview display)
    pub streams: Vec<TeamStream>,
    /// Free-form quick notes, newest first
    pub notes: Vec<QuickNote>,
    /// Projects on the workbench tab
    pub projects: Vec<Project>,
    /// Coordination calendar
    pub calendar: CalendarBoard,
    /// Checklist templates and completion state
    pub checklists: ChecklistRegistry,
    /// Report queue, quality gates, reminders, share set
    pub desk: ReportDesk,
    /// Journey islands per workspace tab
    pub journeys: JourneyBoard,
    /// Per-project approval flags
    approvals: HashMap<String, ApprovalState>,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            board: Vec::new(),
            actions: Vec::new(),
            streams: Vec::new(),
            notes: Vec::new(),
            projects: Vec::new(),
            calendar: CalendarBoard::new(calendar::PERIOD_LENGTH),
            checklists: ChecklistRegistry::new(),
            desk: ReportDesk::new(),
            journeys: JourneyBoard::new(),
            approvals: HashMap::new(),
        }
    }

    /// Create a workspace populated with the embedded demo records.
    pub fn seeded() -> Self {
        seed::workspace()
    }

    // === Cases ===

    /// Add a case to the workflow. The title is required; an empty
    /// technician falls back to the "unassigned" label. Appends to the end
    /// of the collection.
    pub fn add_case(
        &mut self,
        title: &str,
        technician: &str,
        stage: CaseStage,
        due_date: &str,
        due_time: &str,
    ) -> Result<&Case> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("case title is required".to_string()));
        }
        let technician = match technician.trim() {
            "" => "نامشخص",
            t => t,
        };
        let id = generate_id("case", title);
        let external_ref = synthesize_ref(title, 1500, 800);
        let case = Case::new(
            id,
            external_ref,
            title.to_string(),
            technician.to_string(),
            stage,
            build_due_label(due_date, due_time),
        );
        let idx = self.cases.len();
        self.cases.push(case);
        Ok(&self.cases[idx])
    }

    /// Move one case to a new stage. Exactly that case is updated; every
    /// other entity is untouched. Unknown id is a typed error, not a no-op.
    pub fn set_case_stage(&mut self, id: &str, stage: CaseStage) -> Result<&Case> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        case.stage = stage;
        case.updated_at = Utc::now();
        Ok(case)
    }

    /// Filtered view over the case list; ordering preserved from the source.
    pub fn filter_cases(&self, filter: CaseFilter, technician: &str) -> Vec<&Case> {
        filter::filter_cases(&self.cases, filter, technician)
    }

    /// Number of cases in each workflow column.
    pub fn bucket_counts(&self) -> HashMap<StageBucket, usize> {
        let mut counts = HashMap::new();
        for case in &self.cases {
            *counts.entry(case.stage.bucket()).or_insert(0) += 1;
        }
        counts
    }

    // === Team board ===

    /// Update the status of one board item. The visual theme is derived
    /// from the status enum, so it can never go stale.
    pub fn set_board_status(&mut self, id: &str, status: BoardStatus) -> Result<&BoardItem> {
        let item = self
            .board
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        item.status = status;
        item.updated_at = Utc::now();
        Ok(item)
    }

    /// Board items, optionally restricted to one channel.
    pub fn filter_board(&self, channel: Option<Channel>) -> Vec<&BoardItem> {
        filter::filter_board(&self.board, channel)
    }

    // === Urgent actions ===

    /// Record an urgent action, newest first. Empty owner falls back to the
    /// "unassigned" label.
    pub fn add_action(
        &mut self,
        title: &str,
        owner: &str,
        due_date: &str,
        due_time: &str,
        channel: Channel,
    ) -> Result<&ActionItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("action title is required".to_string()));
        }
        let owner = match owner.trim() {
            "" => "نامشخص",
            o => o,
        };
        let action = ActionItem {
            id: generate_id("act", title),
            title: title.to_string(),
            owner: owner.to_string(),
            due_label: build_due_label(due_date, due_time),
            channel,
            created_at: Utc::now(),
        };
        self.actions.insert(0, action);
        Ok(&self.actions[0])
    }

    /// Complete an urgent action: it is removed, not archived.
    pub fn complete_action(&mut self, id: &str) -> Result<ActionItem> {
        let idx = self
            .actions
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.actions.remove(idx))
    }

    // === Quick notes ===

    /// Pin a quick note, newest first.
    pub fn add_note(&mut self, text: &str) -> Result<&QuickNote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("note text is required".to_string()));
        }
        let note = QuickNote {
            id: generate_id("note", text),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    // === Projects & approvals ===

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Approval flags for a project. Defaults to no requests.
    pub fn approval(&self, project_id: &str) -> ApprovalState {
        self.approvals.get(project_id).copied().unwrap_or_default()
    }

    /// Request the digital stamp for a project. Monotonic: once requested,
    /// the flag never resets within the session. Returns the notice text.
    pub fn request_stamp(&mut self, project_id: &str) -> Result<String> {
        let external_ref = self.project(project_id)?.external_ref.clone();
        self.approvals
            .entry(project_id.to_string())
            .or_default()
            .stamp_requested = true;
        Ok(format!(
            "مهر دیجیتال آسیاکلاس برای {} فعال شد.",
            external_ref
        ))
    }

    /// Request the electronic signature for a project. Monotonic.
    pub fn request_signature(&mut self, project_id: &str) -> Result<String> {
        let external_ref = self.project(project_id)?.external_ref.clone();
        self.approvals
            .entry(project_id.to_string())
            .or_default()
            .signature_requested = true;
        Ok(format!("امضای الکترونیکی {} ثبت شد.", external_ref))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("case", "some title");
        assert!(id.starts_with("case-"));
        let suffix = &id["case-".len()..];
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_synthesize_ref_in_range() {
        for _ in 0..32 {
            let r = synthesize_ref("subject", 1800, 900);
            let n: u32 = r.strip_prefix("UTN-").unwrap().parse().unwrap();
            assert!((1800..2700).contains(&n), "out of range: {}", r);
        }
    }

    #[test]
    fn test_add_case_requires_title() {
        let mut ws = Workspace::new();
        let err = ws.add_case("  ", "سارا رحیمی", CaseStage::PendingIntake, "", "");
        assert!(matches!(err, Err(Error::InvalidInput(_))));
        assert!(ws.cases.is_empty());
    }

    #[test]
    fn test_add_case_defaults_technician() {
        let mut ws = Workspace::new();
        let case = ws
            .add_case("بازرسی پمپ", " ", CaseStage::PendingIntake, "", "")
            .unwrap();
        assert_eq!(case.technician, "نامشخص");
        assert_eq!(case.due_label, crate::models::NO_DUE_LABEL);
    }

    #[test]
    fn test_set_case_stage_updates_exactly_one() {
        let mut ws = Workspace::seeded();
        let before: Vec<(String, CaseStage)> =
            ws.cases.iter().map(|c| (c.id.clone(), c.stage)).collect();
        let target = before[1].0.clone();

        ws.set_case_stage(&target, CaseStage::Documentation).unwrap();

        for (id, stage) in &before {
            let now = ws.cases.iter().find(|c| &c.id == id).unwrap();
            if id == &target {
                assert_eq!(now.stage, CaseStage::Documentation);
            } else {
                assert_eq!(now.stage, *stage);
            }
        }
    }

    #[test]
    fn test_set_case_stage_unknown_id() {
        let mut ws = Workspace::seeded();
        let snapshot: Vec<String> = ws.cases.iter().map(|c| c.id.clone()).collect();
        let err = ws.set_case_stage("case-ffff", CaseStage::Documentation);
        assert!(matches!(err, Err(Error::NotFound(_))));
        let after: Vec<String> = ws.cases.iter().map(|c| c.id.clone()).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_complete_action_removes_it() {
        let mut ws = Workspace::seeded();
        let count = ws.actions.len();
        let id = ws.actions[0].id.clone();
        ws.complete_action(&id).unwrap();
        assert_eq!(ws.actions.len(), count - 1);
        assert!(ws.actions.iter().all(|a| a.id != id));
        assert!(matches!(
            ws.complete_action(&id),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_approvals_are_monotonic() {
        let mut ws = Workspace::seeded();
        let project = ws.projects[0].id.clone();
        assert!(!ws.approval(&project).stamp_requested);

        ws.request_stamp(&project).unwrap();
        assert!(ws.approval(&project).stamp_requested);
        assert!(!ws.approval(&project).signature_requested);

        // Re-requesting keeps the flag set.
        ws.request_stamp(&project).unwrap();
        ws.request_signature(&project).unwrap();
        let state = ws.approval(&project);
        assert!(state.stamp_requested && state.signature_requested);
    }

    #[test]
    fn test_approval_unknown_project() {
        let mut ws = Workspace::seeded();
        assert!(matches!(
            ws.request_stamp("utn-0000-workbench"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_bucket_counts_cover_all_cases() {
        let ws = Workspace::seeded();
        let counts = ws.bucket_counts();
        let total: usize = counts.values().sum();
        assert_eq!(total, ws.cases.len());
    }
}
