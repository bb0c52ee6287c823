//! Command implementations for the workspace CLI.
//!
//! This module contains the business logic for each CLI command. Every
//! command operates on the seeded in-memory [`Workspace`], parses enum
//! tokens at this boundary, and returns a typed result that renders as
//! JSON (default) or human-readable text.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::export;
use crate::models::{
    ActionItem, BoardItem, CalendarEvent, CalendarView, Case, CaseFilter, CaseStage, Channel,
    GateStatus, Island, Progress, QualityGate, QuickNote, Reminder, ReportItem, ReportRange,
    ReportStage, ReportStageFilter, Sensitivity, StageBucket, TimeRange,
};
use crate::workspace::{metrics, seed, ReportDraft, ReportFilter, Workspace};
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult: Serialize {
    /// Format for human-readable output.
    fn to_human(&self) -> String;

    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Print a command result in the requested format.
pub fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

fn parse<T: FromStr<Err = String>>(token: &str) -> Result<T> {
    token.parse::<T>().map_err(Error::InvalidInput)
}

fn parse_opt<T: FromStr<Err = String>>(token: Option<&str>) -> Result<Option<T>> {
    token.map(|t| parse(t)).transpose()
}

// === Views ===
//
// Listing views carry the derived display fields (Persian labels, theme
// classes) alongside the raw tokens, so consumers never recompute them
// inconsistently.

/// A case with its derived display fields.
#[derive(Debug, Serialize)]
pub struct CaseView {
    pub id: String,
    pub external_ref: String,
    pub title: String,
    pub technician: String,
    pub stage: CaseStage,
    pub stage_label: &'static str,
    pub bucket: StageBucket,
    pub due_label: String,
}

impl CaseView {
    fn new(case: &Case) -> Self {
        Self {
            id: case.id.clone(),
            external_ref: case.external_ref.clone(),
            title: case.title.clone(),
            technician: case.technician.clone(),
            stage: case.stage,
            stage_label: case.stage.label(),
            bucket: case.stage.bucket(),
            due_label: case.due_label.clone(),
        }
    }

    fn line(&self) -> String {
        format!(
            "{} {} [{}] {} — {} ({})",
            self.id, self.external_ref, self.stage_label, self.title, self.technician, self.due_label
        )
    }
}

/// A board item with its derived status theme.
#[derive(Debug, Serialize)]
pub struct BoardItemView {
    pub id: String,
    pub external_ref: String,
    pub title: String,
    pub owner: String,
    pub status: crate::models::BoardStatus,
    pub status_label: &'static str,
    pub theme: &'static str,
    pub location: String,
    pub due_label: String,
    pub channel: Channel,
    pub channel_label: &'static str,
}

impl BoardItemView {
    fn new(item: &BoardItem) -> Self {
        Self {
            id: item.id.clone(),
            external_ref: item.external_ref.clone(),
            title: item.title.clone(),
            owner: item.owner.clone(),
            status: item.status,
            status_label: item.status.label(),
            theme: item.status.badge_class(),
            location: item.location.clone(),
            due_label: item.due_label.clone(),
            channel: item.channel,
            channel_label: item.channel.label(),
        }
    }

    fn line(&self) -> String {
        format!(
            "{} {} [{}] {} — {} · {} · {}",
            self.id,
            self.external_ref,
            self.status_label,
            self.title,
            self.owner,
            self.location,
            self.due_label
        )
    }
}

/// A calendar event with its channel-derived theme.
#[derive(Debug, Serialize)]
pub struct EventView {
    pub id: String,
    pub day: u8,
    pub label: String,
    pub channel: Channel,
    pub channel_label: &'static str,
    pub theme: &'static str,
    pub accent: &'static str,
}

impl EventView {
    fn new(event: &CalendarEvent) -> Self {
        let tone = event.channel.tone();
        Self {
            id: event.id.clone(),
            day: event.day,
            label: event.label.clone(),
            channel: event.channel,
            channel_label: event.channel.label(),
            theme: tone.badge_class(),
            accent: tone.accent_class(),
        }
    }

    fn line(&self) -> String {
        format!(
            "{} روز {} — {} (کانال: {})",
            self.id, self.day, self.label, self.channel_label
        )
    }
}

/// A report with derived labels, theme, and share membership.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub id: String,
    pub external_ref: String,
    pub subject: String,
    pub owner: String,
    pub stage: ReportStage,
    pub stage_label: &'static str,
    pub theme: &'static str,
    pub due_label: String,
    pub channel: Channel,
    pub channel_label: &'static str,
    pub completeness: u8,
    pub attachments: u32,
    pub sensitivity: Sensitivity,
    pub sensitivity_label: &'static str,
    pub shared: bool,
}

impl ReportView {
    fn new(item: &ReportItem, shared: bool) -> Self {
        Self {
            id: item.id.clone(),
            external_ref: item.external_ref.clone(),
            subject: item.subject.clone(),
            owner: item.owner.clone(),
            stage: item.stage,
            stage_label: item.stage.label(),
            theme: item.stage.badge_class(),
            due_label: item.due_label.clone(),
            channel: item.channel,
            channel_label: item.channel.label(),
            completeness: item.completeness,
            attachments: item.attachments,
            sensitivity: item.sensitivity,
            sensitivity_label: item.sensitivity.label(),
            shared,
        }
    }

    fn line(&self) -> String {
        format!(
            "{} {} [{}] {} — {} · {}% · پیوست {}{}",
            self.id,
            self.external_ref,
            self.stage_label,
            self.subject,
            self.owner,
            self.completeness,
            self.attachments,
            if self.shared { " · هم‌رسانی شده" } else { "" }
        )
    }
}

/// A quality gate with its derived theme.
#[derive(Debug, Serialize)]
pub struct GateView {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub status: GateStatus,
    pub theme: &'static str,
}

impl GateView {
    fn new(gate: &QualityGate) -> Self {
        Self {
            id: gate.id.clone(),
            title: gate.title.clone(),
            detail: gate.detail.clone(),
            status: gate.status,
            theme: gate.status.badge_class(),
        }
    }

    fn line(&self) -> String {
        format!("{} [{}] {} — {}", self.id, self.status, self.title, self.detail)
    }
}

// === Orient ===

/// Workspace overview: collection sizes and workflow column counts.
#[derive(Debug, Serialize)]
pub struct OrientResult {
    pub technician: String,
    pub cases: usize,
    pub board_items: usize,
    pub actions: usize,
    pub calendar_events: usize,
    pub reports: usize,
    pub shared_reports: usize,
    pub quality_gates: usize,
    pub projects: usize,
    pub receive: usize,
    pub field: usize,
    pub handover: usize,
}

impl CommandResult for OrientResult {
    fn to_human(&self) -> String {
        format!(
            "Workspace for {}\n  cases: {} (receive {}, field {}, handover {})\n  board items: {}\n  urgent actions: {}\n  calendar events: {}\n  reports: {} ({} shared)\n  quality gates: {}\n  projects: {}",
            self.technician,
            self.cases,
            self.receive,
            self.field,
            self.handover,
            self.board_items,
            self.actions,
            self.calendar_events,
            self.reports,
            self.shared_reports,
            self.quality_gates,
            self.projects,
        )
    }
}

/// Get the workspace overview.
pub fn orient(ws: &Workspace, technician: &str) -> OrientResult {
    let buckets = ws.bucket_counts();
    OrientResult {
        technician: technician.to_string(),
        cases: ws.cases.len(),
        board_items: ws.board.len(),
        actions: ws.actions.len(),
        calendar_events: ws.calendar.events.len(),
        reports: ws.desk.items.len(),
        shared_reports: ws.desk.shared_ids().len(),
        quality_gates: ws.desk.gates.len(),
        projects: ws.projects.len(),
        receive: buckets.get(&StageBucket::Receive).copied().unwrap_or(0),
        field: buckets.get(&StageBucket::Field).copied().unwrap_or(0),
        handover: buckets.get(&StageBucket::Handover).copied().unwrap_or(0),
    }
}

// === Cases ===

/// Filtered case list.
#[derive(Debug, Serialize)]
pub struct CaseListResult {
    pub filter: CaseFilter,
    pub count: usize,
    pub cases: Vec<CaseView>,
}

impl CommandResult for CaseListResult {
    fn to_human(&self) -> String {
        if self.cases.is_empty() {
            return "No cases match the filter".to_string();
        }
        self.cases
            .iter()
            .map(CaseView::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List cases under a filter key.
pub fn case_list(ws: &Workspace, filter: &str, technician: &str) -> Result<CaseListResult> {
    let filter: CaseFilter = parse(filter)?;
    let cases: Vec<CaseView> = ws
        .filter_cases(filter, technician)
        .into_iter()
        .map(CaseView::new)
        .collect();
    Ok(CaseListResult {
        filter,
        count: cases.len(),
        cases,
    })
}

/// A single changed or created case.
#[derive(Debug, Serialize)]
pub struct CaseResult {
    pub case: CaseView,
}

impl CommandResult for CaseResult {
    fn to_human(&self) -> String {
        self.case.line()
    }
}

/// Add a case to the workflow.
pub fn case_add(
    ws: &mut Workspace,
    title: &str,
    technician: &str,
    stage: &str,
    due_date: &str,
    due_time: &str,
) -> Result<CaseResult> {
    let stage: CaseStage = parse(stage)?;
    let case = ws.add_case(title, technician, stage, due_date, due_time)?;
    Ok(CaseResult {
        case: CaseView::new(case),
    })
}

/// Move a case to a new stage.
pub fn case_stage(ws: &mut Workspace, id: &str, stage: &str) -> Result<CaseResult> {
    let stage: CaseStage = parse(stage)?;
    let case = ws.set_case_stage(id, stage)?;
    Ok(CaseResult {
        case: CaseView::new(case),
    })
}

// === Team board ===

/// Filtered board listing.
#[derive(Debug, Serialize)]
pub struct BoardListResult {
    pub count: usize,
    pub items: Vec<BoardItemView>,
}

impl CommandResult for BoardListResult {
    fn to_human(&self) -> String {
        if self.items.is_empty() {
            return "No board items match the filter".to_string();
        }
        self.items
            .iter()
            .map(BoardItemView::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List board items, optionally restricted to one channel.
pub fn board_list(ws: &Workspace, channel: Option<&str>) -> Result<BoardListResult> {
    let channel: Option<Channel> = parse_opt(channel)?;
    let items: Vec<BoardItemView> = ws
        .filter_board(channel)
        .into_iter()
        .map(BoardItemView::new)
        .collect();
    Ok(BoardListResult {
        count: items.len(),
        items,
    })
}

/// A single updated board item.
#[derive(Debug, Serialize)]
pub struct BoardItemResult {
    pub item: BoardItemView,
}

impl CommandResult for BoardItemResult {
    fn to_human(&self) -> String {
        self.item.line()
    }
}

/// Update the status of a board item.
pub fn board_status(ws: &mut Workspace, id: &str, status: &str) -> Result<BoardItemResult> {
    let status = parse(status)?;
    let item = ws.set_board_status(id, status)?;
    Ok(BoardItemResult {
        item: BoardItemView::new(item),
    })
}

// === Urgent actions ===

/// The urgent action list.
#[derive(Debug, Serialize)]
pub struct ActionListResult {
    pub count: usize,
    pub actions: Vec<ActionItem>,
}

impl CommandResult for ActionListResult {
    fn to_human(&self) -> String {
        if self.actions.is_empty() {
            return "No urgent actions".to_string();
        }
        self.actions
            .iter()
            .map(|a| {
                format!(
                    "{} {} — {} ({}, کانال: {})",
                    a.id,
                    a.title,
                    a.owner,
                    a.due_label,
                    a.channel.label()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List urgent actions.
pub fn action_list(ws: &Workspace) -> ActionListResult {
    ActionListResult {
        count: ws.actions.len(),
        actions: ws.actions.clone(),
    }
}

/// A single created action.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub action: ActionItem,
}

impl CommandResult for ActionResult {
    fn to_human(&self) -> String {
        format!(
            "Added action {} ({}, موعد: {})",
            self.action.id, self.action.title, self.action.due_label
        )
    }
}

/// Record an urgent action.
pub fn action_add(
    ws: &mut Workspace,
    title: &str,
    owner: &str,
    due_date: &str,
    due_time: &str,
    channel: &str,
) -> Result<ActionResult> {
    let channel: Channel = parse(channel)?;
    let action = ws.add_action(title, owner, due_date, due_time, channel)?;
    Ok(ActionResult {
        action: action.clone(),
    })
}

/// A completed (removed) action.
#[derive(Debug, Serialize)]
pub struct ActionCompleteResult {
    pub completed: ActionItem,
    pub remaining: usize,
}

impl CommandResult for ActionCompleteResult {
    fn to_human(&self) -> String {
        format!(
            "Completed action {} ({} remaining)",
            self.completed.id, self.remaining
        )
    }
}

/// Complete an urgent action. The action is removed, not archived.
pub fn action_complete(ws: &mut Workspace, id: &str) -> Result<ActionCompleteResult> {
    let completed = ws.complete_action(id)?;
    Ok(ActionCompleteResult {
        completed,
        remaining: ws.actions.len(),
    })
}

// === Calendar ===

/// Calendar listing, optionally for one day, with the view-mode highlight.
#[derive(Debug, Serialize)]
pub struct CalendarListResult {
    pub count: usize,
    pub events: Vec<EventView>,
    /// Highlighted days for the view mode; absent in month view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_days: Option<Vec<u8>>,
}

impl CommandResult for CalendarListResult {
    fn to_human(&self) -> String {
        if self.events.is_empty() {
            return "No events".to_string();
        }
        self.events
            .iter()
            .map(EventView::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List calendar events. `day` restricts to one day; the view mode only
/// adds the highlighted-day set without filtering the events.
pub fn calendar_list(
    ws: &Workspace,
    day: Option<u8>,
    view: &str,
    selected: Option<u8>,
) -> Result<CalendarListResult> {
    let view: CalendarView = parse(view)?;
    let events: Vec<EventView> = match day {
        Some(day) => ws.calendar.events_on(day).into_iter().map(EventView::new).collect(),
        None => ws.calendar.events.iter().map(EventView::new).collect(),
    };
    Ok(CalendarListResult {
        count: events.len(),
        events,
        visible_days: ws
            .calendar
            .visible_days(view, selected)
            .map(|days| days.into_iter().collect()),
    })
}

/// A single created event.
#[derive(Debug, Serialize)]
pub struct EventResult {
    pub event: EventView,
}

impl CommandResult for EventResult {
    fn to_human(&self) -> String {
        self.event.line()
    }
}

/// Add a calendar event.
pub fn calendar_add(ws: &mut Workspace, label: &str, day: u8, channel: &str) -> Result<EventResult> {
    let channel: Channel = parse(channel)?;
    let event = ws.calendar.add_event(label, day, channel)?;
    Ok(EventResult {
        event: EventView::new(event),
    })
}

/// A removed event.
#[derive(Debug, Serialize)]
pub struct EventRemoveResult {
    pub removed: EventView,
    pub remaining: usize,
}

impl CommandResult for EventRemoveResult {
    fn to_human(&self) -> String {
        format!(
            "Removed event {} ({} remaining)",
            self.removed.id, self.remaining
        )
    }
}

/// Remove a calendar event.
pub fn calendar_remove(ws: &mut Workspace, id: &str) -> Result<EventRemoveResult> {
    let removed = ws.calendar.remove_event(id)?;
    Ok(EventRemoveResult {
        removed: EventView::new(&removed),
        remaining: ws.calendar.events.len(),
    })
}

// === Checklists ===

/// One checklist item with its current completion flag.
#[derive(Debug, Serialize)]
pub struct ChecklistItemView {
    pub id: String,
    pub label: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A (project, feature) checklist with its progress.
#[derive(Debug, Serialize)]
pub struct ChecklistResult {
    pub project: String,
    pub feature: String,
    pub items: Vec<ChecklistItemView>,
    pub progress: Progress,
}

impl CommandResult for ChecklistResult {
    fn to_human(&self) -> String {
        let mut lines: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "[{}] {} {}",
                    if item.done { "x" } else { " " },
                    item.id,
                    item.label
                )
            })
            .collect();
        lines.push(format!(
            "{}/{} done ({}%)",
            self.progress.completed, self.progress.total, self.progress.percent
        ));
        lines.join("\n")
    }
}

fn checklist_result(ws: &Workspace, project: &str, feature: &str) -> ChecklistResult {
    let items = ws
        .checklists
        .items(project, feature)
        .into_iter()
        .map(|(item, done)| ChecklistItemView {
            id: item.id.clone(),
            label: item.label.clone(),
            done,
            note: item.note.clone(),
        })
        .collect();
    ChecklistResult {
        project: project.to_string(),
        feature: feature.to_string(),
        items,
        progress: ws.checklists.progress(project, feature),
    }
}

/// Show a (project, feature) checklist with its completion state.
pub fn checklist_show(ws: &Workspace, project: &str, feature: &str) -> ChecklistResult {
    checklist_result(ws, project, feature)
}

/// Toggle one checklist item and return the updated checklist.
pub fn checklist_toggle(
    ws: &mut Workspace,
    project: &str,
    feature: &str,
    item: &str,
) -> Result<ChecklistResult> {
    ws.checklists.toggle(project, feature, item)?;
    Ok(checklist_result(ws, project, feature))
}

// === Projects & approvals ===

/// A project with its approval flags and per-feature progress.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: String,
    pub external_ref: String,
    pub title: String,
    pub owner: String,
    pub focus: String,
    pub due_label: String,
    pub progress: u8,
    pub stamp_requested: bool,
    pub signature_requested: bool,
    pub features: Vec<FeatureProgressView>,
}

/// Checklist progress for one project feature.
#[derive(Debug, Serialize)]
pub struct FeatureProgressView {
    pub id: String,
    pub label: String,
    pub progress: Progress,
}

/// The project list.
#[derive(Debug, Serialize)]
pub struct ProjectListResult {
    pub count: usize,
    pub projects: Vec<ProjectView>,
}

impl CommandResult for ProjectListResult {
    fn to_human(&self) -> String {
        self.projects
            .iter()
            .map(|p| {
                format!(
                    "{} {} {} — {} ({}%)",
                    p.id, p.external_ref, p.title, p.owner, p.progress
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List projects with approvals and checklist progress.
pub fn project_list(ws: &Workspace) -> ProjectListResult {
    let projects = ws
        .projects
        .iter()
        .map(|project| {
            let approval = ws.approval(&project.id);
            ProjectView {
                id: project.id.clone(),
                external_ref: project.external_ref.clone(),
                title: project.title.clone(),
                owner: project.owner.clone(),
                focus: project.focus.clone(),
                due_label: project.due_label.clone(),
                progress: project.progress,
                stamp_requested: approval.stamp_requested,
                signature_requested: approval.signature_requested,
                features: project
                    .features
                    .iter()
                    .map(|f| FeatureProgressView {
                        id: f.id.clone(),
                        label: f.label.clone(),
                        progress: ws.checklists.progress(&project.id, &f.id),
                    })
                    .collect(),
            }
        })
        .collect::<Vec<_>>();
    ProjectListResult {
        count: projects.len(),
        projects,
    }
}

/// Result of an approval request.
#[derive(Debug, Serialize)]
pub struct ApproveResult {
    pub project: String,
    pub stamp_requested: bool,
    pub signature_requested: bool,
    pub notice: String,
}

impl CommandResult for ApproveResult {
    fn to_human(&self) -> String {
        self.notice.clone()
    }
}

/// Request a stamp or signature for a project. Monotonic.
pub fn project_approve(ws: &mut Workspace, project: &str, kind: &str) -> Result<ApproveResult> {
    let notice = match kind {
        "stamp" => ws.request_stamp(project)?,
        "signature" => ws.request_signature(project)?,
        other => {
            return Err(Error::InvalidInput(format!(
                "Unknown approval kind: {} (expected stamp or signature)",
                other
            )))
        }
    };
    let state = ws.approval(project);
    Ok(ApproveResult {
        project: project.to_string(),
        stamp_requested: state.stamp_requested,
        signature_requested: state.signature_requested,
        notice,
    })
}

// === Reports ===

fn report_filter(
    channel: Option<&str>,
    status: &str,
    search: &str,
) -> Result<ReportFilter> {
    Ok(ReportFilter {
        channel: parse_opt(channel)?,
        stage: parse::<ReportStageFilter>(status)?,
        search: search.to_string(),
    })
}

/// Filtered report queue.
#[derive(Debug, Serialize)]
pub struct ReportListResult {
    pub count: usize,
    pub reports: Vec<ReportView>,
}

impl CommandResult for ReportListResult {
    fn to_human(&self) -> String {
        if self.reports.is_empty() {
            return "No reports match the filter".to_string();
        }
        self.reports
            .iter()
            .map(ReportView::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List the report queue under channel/status/search filters.
pub fn report_list(
    ws: &Workspace,
    channel: Option<&str>,
    status: &str,
    search: &str,
) -> Result<ReportListResult> {
    let filter = report_filter(channel, status, search)?;
    let reports: Vec<ReportView> = ws
        .desk
        .filtered(&filter)
        .into_iter()
        .map(|item| ReportView::new(item, ws.desk.is_shared(&item.id)))
        .collect();
    Ok(ReportListResult {
        count: reports.len(),
        reports,
    })
}

/// A single created or updated report.
#[derive(Debug, Serialize)]
pub struct ReportResult {
    pub report: ReportView,
}

impl CommandResult for ReportResult {
    fn to_human(&self) -> String {
        self.report.line()
    }
}

/// Caller-supplied fields for `report create`.
pub struct ReportCreateArgs<'a> {
    pub subject: &'a str,
    pub owner: &'a str,
    pub channel: &'a str,
    pub stage: &'a str,
    pub due_date: &'a str,
    pub due_time: &'a str,
    pub completeness: u8,
    pub attachments: u32,
    pub sensitivity: &'a str,
}

/// Create a report in the queue.
pub fn report_create(ws: &mut Workspace, args: ReportCreateArgs<'_>) -> Result<ReportResult> {
    let draft = ReportDraft {
        subject: args.subject.to_string(),
        owner: args.owner.to_string(),
        channel: parse(args.channel)?,
        stage: parse(args.stage)?,
        due_date: args.due_date.to_string(),
        due_time: args.due_time.to_string(),
        completeness: args.completeness,
        attachments: args.attachments,
        sensitivity: parse(args.sensitivity)?,
    };
    let item = ws.desk.create(draft)?;
    let shared = false;
    Ok(ReportResult {
        report: ReportView::new(item, shared),
    })
}

/// Set a report's stage (manual override, any stage to any stage).
pub fn report_stage(ws: &mut Workspace, id: &str, stage: &str) -> Result<ReportResult> {
    let stage: ReportStage = parse(stage)?;
    ws.desk.set_stage(id, stage)?;
    let item = ws.desk.get(id)?;
    Ok(ReportResult {
        report: ReportView::new(item, ws.desk.is_shared(id)),
    })
}

/// Result of a share toggle.
#[derive(Debug, Serialize)]
pub struct ShareResult {
    pub id: String,
    pub external_ref: String,
    pub shared: bool,
}

impl CommandResult for ShareResult {
    fn to_human(&self) -> String {
        if self.shared {
            format!("گزارش {} هم‌رسانی شد.", self.external_ref)
        } else {
            format!("هم‌رسانی گزارش {} لغو شد.", self.external_ref)
        }
    }
}

/// Toggle a report's share membership.
pub fn report_share(ws: &mut Workspace, id: &str) -> Result<ShareResult> {
    let shared = ws.desk.toggle_share(id)?;
    let item = ws.desk.get(id)?;
    Ok(ShareResult {
        id: item.id.clone(),
        external_ref: item.external_ref.clone(),
        shared,
    })
}

/// Result of a CSV export: either a written file or a notice.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub exported: bool,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub notice: String,
}

impl CommandResult for ExportResult {
    fn to_human(&self) -> String {
        self.notice.clone()
    }
}

/// Export the currently filtered queue view to CSV. An empty view writes
/// nothing and returns a notice instead.
pub fn report_export(
    ws: &Workspace,
    channel: Option<&str>,
    status: &str,
    search: &str,
    range: &str,
    out_dir: &Path,
) -> Result<ExportResult> {
    let filter = report_filter(channel, status, search)?;
    let range: ReportRange = parse(range)?;
    let filtered = ws.desk.filtered(&filter);
    match export::csv_document(&filtered) {
        None => Ok(ExportResult {
            exported: false,
            rows: 0,
            path: None,
            notice: "ابتدا گزارشی را برای خروجی انتخاب یا اضافه کنید.".to_string(),
        }),
        Some(csv) => {
            let path = export::write_export(out_dir, &export::csv_filename(range), &csv)?;
            Ok(ExportResult {
                exported: true,
                rows: filtered.len(),
                path: Some(path.display().to_string()),
                notice: "خروجی اکسل آماده و دانلود شد.".to_string(),
            })
        }
    }
}

/// Result of a plain-text summary export.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub id: String,
    pub external_ref: String,
    pub path: String,
    pub notice: String,
}

impl CommandResult for SummaryResult {
    fn to_human(&self) -> String {
        self.notice.clone()
    }
}

/// Write the plain-text summary of one report.
pub fn report_summary(ws: &Workspace, id: &str, out_dir: &Path) -> Result<SummaryResult> {
    let item = ws.desk.get(id)?;
    let path = export::write_export(
        out_dir,
        &export::summary_filename(item),
        &export::summary_text(item),
    )?;
    Ok(SummaryResult {
        id: item.id.clone(),
        external_ref: item.external_ref.clone(),
        path: path.display().to_string(),
        notice: format!("خلاصه گزارش {} دانلود شد.", item.external_ref),
    })
}

// === Quality gates ===

/// The quality gate list.
#[derive(Debug, Serialize)]
pub struct GateListResult {
    pub count: usize,
    pub gates: Vec<GateView>,
}

impl CommandResult for GateListResult {
    fn to_human(&self) -> String {
        if self.gates.is_empty() {
            return "No quality gates".to_string();
        }
        self.gates
            .iter()
            .map(GateView::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List quality gates.
pub fn gate_list(ws: &Workspace) -> GateListResult {
    GateListResult {
        count: ws.desk.gates.len(),
        gates: ws.desk.gates.iter().map(GateView::new).collect(),
    }
}

/// A single added gate.
#[derive(Debug, Serialize)]
pub struct GateResult {
    pub gate: GateView,
}

impl CommandResult for GateResult {
    fn to_human(&self) -> String {
        self.gate.line()
    }
}

/// Add a quality gate.
pub fn gate_add(ws: &mut Workspace, title: &str, detail: &str, status: &str) -> Result<GateResult> {
    let status: GateStatus = parse(status)?;
    let gate = ws.desk.add_gate(title, detail, status)?;
    Ok(GateResult {
        gate: GateView::new(gate),
    })
}

// === Reminders ===

/// The reminder list.
#[derive(Debug, Serialize)]
pub struct ReminderListResult {
    pub count: usize,
    pub reminders: Vec<Reminder>,
}

impl CommandResult for ReminderListResult {
    fn to_human(&self) -> String {
        if self.reminders.is_empty() {
            return "No reminders".to_string();
        }
        self.reminders
            .iter()
            .map(|r| format!("{} {} — {} ({})", r.id, r.title, r.owner, r.due_label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List report desk reminders.
pub fn reminder_list(ws: &Workspace) -> ReminderListResult {
    ReminderListResult {
        count: ws.desk.reminders.len(),
        reminders: ws.desk.reminders.clone(),
    }
}

/// A single added reminder.
#[derive(Debug, Serialize)]
pub struct ReminderResult {
    pub reminder: Reminder,
}

impl CommandResult for ReminderResult {
    fn to_human(&self) -> String {
        format!(
            "Added reminder {} ({}, موعد: {})",
            self.reminder.id, self.reminder.title, self.reminder.due_label
        )
    }
}

/// Add a reminder to the report desk.
pub fn reminder_add(ws: &mut Workspace, title: &str, owner: &str, due: &str) -> Result<ReminderResult> {
    let reminder = ws.desk.add_reminder(title, owner, due)?;
    Ok(ReminderResult {
        reminder: reminder.clone(),
    })
}

// === Quick notes ===

/// The quick note list.
#[derive(Debug, Serialize)]
pub struct NoteListResult {
    pub count: usize,
    pub notes: Vec<QuickNote>,
}

impl CommandResult for NoteListResult {
    fn to_human(&self) -> String {
        if self.notes.is_empty() {
            return "No notes".to_string();
        }
        self.notes
            .iter()
            .map(|n| format!("{} {}", n.id, n.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List quick notes.
pub fn note_list(ws: &Workspace) -> NoteListResult {
    NoteListResult {
        count: ws.notes.len(),
        notes: ws.notes.clone(),
    }
}

/// A single added note.
#[derive(Debug, Serialize)]
pub struct NoteResult {
    pub note: QuickNote,
}

impl CommandResult for NoteResult {
    fn to_human(&self) -> String {
        format!("Added note {}", self.note.id)
    }
}

/// Pin a quick note.
pub fn note_add(ws: &mut Workspace, text: &str) -> Result<NoteResult> {
    let note = ws.add_note(text)?;
    Ok(NoteResult { note: note.clone() })
}

// === Team streams ===

/// A team stream with its channel label.
#[derive(Debug, Serialize)]
pub struct StreamView {
    pub id: String,
    pub title: String,
    pub focus: String,
    pub owner: String,
    pub progress: u8,
    pub channel: Channel,
    pub channel_label: &'static str,
}

/// The team stream list.
#[derive(Debug, Serialize)]
pub struct StreamListResult {
    pub count: usize,
    pub streams: Vec<StreamView>,
}

impl CommandResult for StreamListResult {
    fn to_human(&self) -> String {
        if self.streams.is_empty() {
            return "No team streams".to_string();
        }
        self.streams
            .iter()
            .map(|s| {
                format!(
                    "{} {} ({}%) — {} · {}",
                    s.id, s.title, s.progress, s.owner, s.focus
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List the long-running team streams.
pub fn stream_list(ws: &Workspace) -> StreamListResult {
    StreamListResult {
        count: ws.streams.len(),
        streams: ws
            .streams
            .iter()
            .map(|s| StreamView {
                id: s.id.clone(),
                title: s.title.clone(),
                focus: s.focus.clone(),
                owner: s.owner.clone(),
                progress: s.progress,
                channel: s.channel,
                channel_label: s.channel.label(),
            })
            .collect(),
    }
}

// === Journeys ===

/// Islands of one tab with per-title task counts.
#[derive(Debug, Serialize)]
pub struct JourneyListResult {
    pub tab: String,
    pub islands: Vec<Island>,
    pub counts: std::collections::BTreeMap<String, usize>,
}

impl CommandResult for JourneyListResult {
    fn to_human(&self) -> String {
        self.islands
            .iter()
            .map(|island| {
                let tasks = island
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(i, t)| format!("  {}. {} {} — {}", i, t.id, t.title, t.owner))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{} ({}):\n{}", island.title, island.tasks.len(), tasks)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn journey_result(ws: &Workspace, tab: &str) -> Result<JourneyListResult> {
    Ok(JourneyListResult {
        tab: tab.to_string(),
        islands: ws.journeys.islands(tab)?.to_vec(),
        counts: ws.journeys.stage_counts(tab)?,
    })
}

/// List the islands of a tab. Defaults to the overview tab.
pub fn journey_list(ws: &Workspace, tab: Option<&str>) -> Result<JourneyListResult> {
    journey_result(ws, tab.unwrap_or(seed::OVERVIEW_TAB))
}

/// Reorder a task within its island and return the updated tab.
pub fn journey_reorder(
    ws: &mut Workspace,
    tab: Option<&str>,
    island: &str,
    task: &str,
    index: usize,
) -> Result<JourneyListResult> {
    let tab = tab.unwrap_or(seed::OVERVIEW_TAB);
    ws.journeys.reorder_task(tab, island, task, index)?;
    journey_result(ws, tab)
}

// === Metrics ===

/// Dashboard metrics with the derived totals.
#[derive(Debug, Serialize)]
pub struct MetricsResult {
    pub range: TimeRange,
    pub range_label: &'static str,
    pub tiles: Vec<metrics::Metric>,
    pub quick_stats: Vec<metrics::QuickStat>,
    pub breakdown: Vec<metrics::ActivitySlice>,
    pub spark: Vec<u32>,
    pub total_volume: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_activity: Option<TopActivityView>,
}

/// The dominant activity slice and its share.
#[derive(Debug, Serialize)]
pub struct TopActivityView {
    pub label: String,
    pub value: u32,
    pub percent: u8,
}

impl CommandResult for MetricsResult {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Metrics — {}", self.range_label)];
        for tile in &self.tiles {
            lines.push(format!("  {}: {} ({})", tile.label, tile.value, tile.helper));
        }
        if let Some(top) = &self.top_activity {
            lines.push(format!(
                "  توزیع فعالیت: {} {}٪ از {}",
                top.label, top.percent, self.total_volume
            ));
        }
        lines.join("\n")
    }
}

/// Dashboard metrics for a time range.
pub fn metrics_for(range: &str) -> Result<MetricsResult> {
    let range: TimeRange = parse(range)?;
    let m = metrics::for_range(range);
    let total_volume = m.total_volume();
    let top_activity = m.top_activity().map(|(slice, percent)| TopActivityView {
        label: slice.label.clone(),
        value: slice.value,
        percent,
    });
    Ok(MetricsResult {
        range,
        range_label: range.label(),
        tiles: m.tiles,
        quick_stats: metrics::quick_stats(),
        breakdown: m.breakdown,
        spark: m.spark,
        total_volume,
        top_activity,
    })
}
