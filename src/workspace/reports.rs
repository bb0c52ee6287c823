//! The report desk: publication queue, share set, quality gates, reminders.
//!
//! Reports move through a four-stage publication vocabulary. Transitions
//! are deliberately unconstrained (any stage is reachable from any other)
//! because the desk models a manual override surface, not an enforced
//! lifecycle. Sharing is an idempotent membership toggle. Quality gates are
//! add-only and carry no reference back to any single report.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::models::{
    build_due_label, Channel, GateStatus, QualityGate, Reminder, ReportItem, ReportStage,
    Sensitivity, NO_DUE_LABEL,
};
use crate::{Error, Result};

use super::filter::{filter_reports, ReportFilter};
use super::{generate_id, synthesize_ref};

/// Default detail text for a gate added without one.
const GATE_NO_DETAIL: &str = "بدون توضیح تکمیلی";

/// Default owner for a reminder added without one.
const REMINDER_DEFAULT_OWNER: &str = "دفتر فنی";

/// Caller-supplied fields for a new report.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    /// Report subject (required, trimmed)
    pub subject: String,
    /// Owning technician
    pub owner: String,
    /// Owning channel
    pub channel: Channel,
    /// Initial stage
    pub stage: ReportStage,
    /// Optional due date text
    pub due_date: String,
    /// Optional due time text
    pub due_time: String,
    /// Completeness percentage (0-100)
    pub completeness: u8,
    /// Attachment count
    pub attachments: u32,
    /// Sensitivity classification
    pub sensitivity: Sensitivity,
}

/// Report queue state.
#[derive(Debug, Clone, Default)]
pub struct ReportDesk {
    /// Queue items, newest first
    pub items: Vec<ReportItem>,
    /// Quality gates, newest first
    pub gates: Vec<QualityGate>,
    /// Reminders, newest first
    pub reminders: Vec<Reminder>,
    shared: BTreeSet<String>,
}

impl ReportDesk {
    /// Create an empty desk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a report from a draft and prepend it to the queue.
    ///
    /// The subject is required; the external reference is synthesized into
    /// the UTN-1800..2700 range; the due label follows the shared
    /// date/time formatting rule. Completeness is capped at 100.
    pub fn create(&mut self, draft: ReportDraft) -> Result<&ReportItem> {
        let subject = draft.subject.trim();
        if subject.is_empty() {
            return Err(Error::InvalidInput(
                "report subject is required".to_string(),
            ));
        }
        let now = Utc::now();
        let item = ReportItem {
            id: generate_id("rep", subject),
            external_ref: synthesize_ref(subject, 1800, 900),
            subject: subject.to_string(),
            owner: draft.owner,
            stage: draft.stage,
            due_label: build_due_label(&draft.due_date, &draft.due_time),
            channel: draft.channel,
            completeness: draft.completeness.min(100),
            attachments: draft.attachments,
            sensitivity: draft.sensitivity,
            created_at: now,
            updated_at: now,
        };
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Look up a report by id.
    pub fn get(&self, id: &str) -> Result<&ReportItem> {
        self.items
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Set the stage of one report. Any stage is reachable from any other
    /// (manual override); exactly one report is updated.
    pub fn set_stage(&mut self, id: &str, stage: ReportStage) -> Result<&ReportItem> {
        let item = self
            .items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        item.stage = stage;
        item.updated_at = Utc::now();
        Ok(item)
    }

    /// Toggle a report's membership in the shared set. Returns whether the
    /// report is shared after the toggle. Toggling twice restores the set.
    pub fn toggle_share(&mut self, id: &str) -> Result<bool> {
        // Membership is only meaningful for a report that exists.
        self.get(id)?;
        if self.shared.remove(id) {
            Ok(false)
        } else {
            self.shared.insert(id.to_string());
            Ok(true)
        }
    }

    /// Whether a report is currently shared.
    pub fn is_shared(&self, id: &str) -> bool {
        self.shared.contains(id)
    }

    /// Ids of all shared reports, in order.
    pub fn shared_ids(&self) -> &BTreeSet<String> {
        &self.shared
    }

    /// The filtered queue view. Pure read; source ordering preserved.
    pub fn filtered(&self, filter: &ReportFilter) -> Vec<&ReportItem> {
        filter_reports(&self.items, filter)
    }

    /// Add a quality gate, newest first. The title is required; a missing
    /// detail gets the standard placeholder.
    pub fn add_gate(&mut self, title: &str, detail: &str, status: GateStatus) -> Result<&QualityGate> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("gate title is required".to_string()));
        }
        let detail = match detail.trim() {
            "" => GATE_NO_DETAIL,
            d => d,
        };
        let gate = QualityGate {
            id: generate_id("gate", title),
            title: title.to_string(),
            detail: detail.to_string(),
            status,
            created_at: Utc::now(),
        };
        self.gates.insert(0, gate);
        Ok(&self.gates[0])
    }

    /// Add a reminder, newest first. The title is required; owner and due
    /// label fall back to their defaults.
    pub fn add_reminder(&mut self, title: &str, owner: &str, due: &str) -> Result<&Reminder> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput(
                "reminder title is required".to_string(),
            ));
        }
        let owner = match owner.trim() {
            "" => REMINDER_DEFAULT_OWNER,
            o => o,
        };
        let due = match due.trim() {
            "" => NO_DUE_LABEL,
            d => d,
        };
        let reminder = Reminder {
            id: generate_id("rem", title),
            title: title.to_string(),
            owner: owner.to_string(),
            due_label: due.to_string(),
            created_at: Utc::now(),
        };
        self.reminders.insert(0, reminder);
        Ok(&self.reminders[0])
    }
}
