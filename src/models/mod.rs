//! Data models for workspace entities.
//!
//! This module defines the core data structures:
//! - `Case` - Field work tracked through intake/inspection/handover stages
//! - `BoardItem` - Coordination records on the shared team board
//! - `ActionItem` - Ephemeral urgent actions, removed on completion
//! - `CalendarEvent` - Day-of-period entries on the coordination calendar
//! - `ReportItem` - Documents moving through the publication queue
//! - `QualityGate` - Independent pass/pending/warning checks
//! - `ChecklistItem` / `Progress` - Checklist templates and completion stats
//! - `Island` / `JourneyTask` - Kanban-like groupings with ordered tasks
//!
//! All stage, status and channel vocabularies are closed enums. Display
//! labels are Persian (the demo data is Persian throughout); the wire and
//! CLI tokens are `snake_case` ASCII.

pub mod theme;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use theme::Tone;

/// Fallback text when an entity has neither a due date nor a due time.
pub const NO_DUE_LABEL: &str = "بدون موعد";

/// Stage of a case in the field workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStage {
    #[default]
    PendingIntake,
    FieldInspection,
    LabAnalysis,
    AwaitingHandover,
    Documentation,
}

/// Coarse grouping of case stages used by the intake/field/handover columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageBucket {
    Receive,
    Field,
    Handover,
}

impl CaseStage {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStage::PendingIntake => "در انتظار بررسی",
            CaseStage::FieldInspection => "بازرسی میدانی",
            CaseStage::LabAnalysis => "تحلیل آزمایشگاهی",
            CaseStage::AwaitingHandover => "در انتظار تحویل",
            CaseStage::Documentation => "مستندسازی",
        }
    }

    /// Column this stage belongs to on the workflow board.
    pub fn bucket(&self) -> StageBucket {
        match self {
            CaseStage::PendingIntake => StageBucket::Receive,
            CaseStage::FieldInspection | CaseStage::LabAnalysis => StageBucket::Field,
            CaseStage::AwaitingHandover | CaseStage::Documentation => StageBucket::Handover,
        }
    }

    /// True for stages where the case sits in a queue waiting on someone.
    ///
    /// An explicit predicate, so filtering never depends on how the stage
    /// labels happen to be worded.
    pub fn is_waiting(&self) -> bool {
        matches!(self, CaseStage::PendingIntake | CaseStage::AwaitingHandover)
    }

    /// Get all case stages.
    pub fn all() -> &'static [CaseStage] {
        &[
            CaseStage::PendingIntake,
            CaseStage::FieldInspection,
            CaseStage::LabAnalysis,
            CaseStage::AwaitingHandover,
            CaseStage::Documentation,
        ]
    }
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseStage::PendingIntake => "pending_intake",
            CaseStage::FieldInspection => "field_inspection",
            CaseStage::LabAnalysis => "lab_analysis",
            CaseStage::AwaitingHandover => "awaiting_handover",
            CaseStage::Documentation => "documentation",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for CaseStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending_intake" => Ok(CaseStage::PendingIntake),
            "field_inspection" => Ok(CaseStage::FieldInspection),
            "lab_analysis" => Ok(CaseStage::LabAnalysis),
            "awaiting_handover" => Ok(CaseStage::AwaitingHandover),
            "documentation" => Ok(CaseStage::Documentation),
            _ => Err(format!("Unknown case stage: {}", s)),
        }
    }
}

/// Status of an item on the shared team board.
///
/// Independent vocabulary from `CaseStage`; the board tracks coordination,
/// not the case lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    #[default]
    InProgress,
    AwaitingQa,
    ReadyToShip,
    NeedsInfo,
    Delivered,
}

impl BoardStatus {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            BoardStatus::InProgress => "در جریان",
            BoardStatus::AwaitingQa => "در انتظار QA",
            BoardStatus::ReadyToShip => "آماده ارسال",
            BoardStatus::NeedsInfo => "نیازمند اطلاعات",
            BoardStatus::Delivered => "تحویل شد",
        }
    }

    /// Get all board statuses.
    pub fn all() -> &'static [BoardStatus] {
        &[
            BoardStatus::InProgress,
            BoardStatus::AwaitingQa,
            BoardStatus::ReadyToShip,
            BoardStatus::NeedsInfo,
            BoardStatus::Delivered,
        ]
    }
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoardStatus::InProgress => "in_progress",
            BoardStatus::AwaitingQa => "awaiting_qa",
            BoardStatus::ReadyToShip => "ready_to_ship",
            BoardStatus::NeedsInfo => "needs_info",
            BoardStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for BoardStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(BoardStatus::InProgress),
            "awaiting_qa" => Ok(BoardStatus::AwaitingQa),
            "ready_to_ship" => Ok(BoardStatus::ReadyToShip),
            "needs_info" => Ok(BoardStatus::NeedsInfo),
            "delivered" => Ok(BoardStatus::Delivered),
            _ => Err(format!("Unknown board status: {}", s)),
        }
    }
}

/// Stage of a report in the publication queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStage {
    #[default]
    Analyzing,
    PendingApproval,
    ReadyToPublish,
    Shared,
}

impl ReportStage {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReportStage::Analyzing => "در حال تحلیل",
            ReportStage::PendingApproval => "در انتظار تایید",
            ReportStage::ReadyToPublish => "آماده انتشار",
            ReportStage::Shared => "ارسال شد",
        }
    }

    /// Whether this stage falls inside the given status filter bucket.
    pub fn in_filter(&self, filter: ReportStageFilter) -> bool {
        match filter {
            ReportStageFilter::All => true,
            ReportStageFilter::Draft => {
                matches!(self, ReportStage::Analyzing | ReportStage::PendingApproval)
            }
            ReportStageFilter::Ready => matches!(self, ReportStage::ReadyToPublish),
            ReportStageFilter::Shared => matches!(self, ReportStage::Shared),
        }
    }

    /// Get all report stages.
    pub fn all() -> &'static [ReportStage] {
        &[
            ReportStage::Analyzing,
            ReportStage::PendingApproval,
            ReportStage::ReadyToPublish,
            ReportStage::Shared,
        ]
    }
}

impl fmt::Display for ReportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStage::Analyzing => "analyzing",
            ReportStage::PendingApproval => "pending_approval",
            ReportStage::ReadyToPublish => "ready_to_publish",
            ReportStage::Shared => "shared",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ReportStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "analyzing" => Ok(ReportStage::Analyzing),
            "pending_approval" => Ok(ReportStage::PendingApproval),
            "ready_to_publish" => Ok(ReportStage::ReadyToPublish),
            "shared" => Ok(ReportStage::Shared),
            _ => Err(format!("Unknown report stage: {}", s)),
        }
    }
}

/// Status filter buckets for the report queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStageFilter {
    #[default]
    All,
    /// Analyzing or pending approval.
    Draft,
    /// Ready to publish.
    Ready,
    /// Already shared.
    Shared,
}

impl std::str::FromStr for ReportStageFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(ReportStageFilter::All),
            "draft" => Ok(ReportStageFilter::Draft),
            "ready" => Ok(ReportStageFilter::Ready),
            "shared" => Ok(ReportStageFilter::Shared),
            _ => Err(format!("Unknown report status filter: {}", s)),
        }
    }
}

/// Status of a quality gate check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Passed,
    #[default]
    Pending,
    Warning,
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateStatus::Passed => "passed",
            GateStatus::Pending => "pending",
            GateStatus::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for GateStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "passed" => Ok(GateStatus::Passed),
            "pending" => Ok(GateStatus::Pending),
            "warning" => Ok(GateStatus::Warning),
            _ => Err(format!("Unknown gate status: {}", s)),
        }
    }
}

/// Team or function a workspace entity belongs to.
///
/// Channels group items purely for filtering and theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Field,
    QualityControl,
    Qa,
    Coordination,
    Management,
    Workshop,
    Operator,
    Documentation,
}

impl Channel {
    /// Persian display label (the QA channel keeps its Latin label).
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Field => "میدانی",
            Channel::QualityControl => "کنترل کیفیت",
            Channel::Qa => "QA",
            Channel::Coordination => "هماهنگی",
            Channel::Management => "مدیریت",
            Channel::Workshop => "کارگاه",
            Channel::Operator => "بهره‌بردار",
            Channel::Documentation => "مستندسازی",
        }
    }

    /// Get all channels.
    pub fn all() -> &'static [Channel] {
        &[
            Channel::Field,
            Channel::QualityControl,
            Channel::Qa,
            Channel::Coordination,
            Channel::Management,
            Channel::Workshop,
            Channel::Operator,
            Channel::Documentation,
        ]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Field => "field",
            Channel::QualityControl => "quality_control",
            Channel::Qa => "qa",
            Channel::Coordination => "coordination",
            Channel::Management => "management",
            Channel::Workshop => "workshop",
            Channel::Operator => "operator",
            Channel::Documentation => "documentation",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept both the ASCII token and the Persian display label; the
        // demo records and the CLI meet at this boundary.
        match s {
            "field" | "میدانی" => Ok(Channel::Field),
            "quality_control" | "کنترل کیفیت" => Ok(Channel::QualityControl),
            "qa" | "QA" => Ok(Channel::Qa),
            "coordination" | "هماهنگی" => Ok(Channel::Coordination),
            "management" | "مدیریت" => Ok(Channel::Management),
            "workshop" | "کارگاه" => Ok(Channel::Workshop),
            "operator" | "بهره‌بردار" => Ok(Channel::Operator),
            "documentation" | "مستندسازی" => Ok(Channel::Documentation),
            _ => Err(format!("Unknown channel: {}", s)),
        }
    }
}

/// Sensitivity classification of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    #[default]
    Normal,
    Confidential,
}

impl Sensitivity {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sensitivity::Normal => "عادی",
            Sensitivity::Confidential => "محرمانه",
        }
    }
}

impl std::str::FromStr for Sensitivity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "normal" | "عادی" => Ok(Sensitivity::Normal),
            "confidential" | "محرمانه" => Ok(Sensitivity::Confidential),
            _ => Err(format!("Unknown sensitivity: {}", s)),
        }
    }
}

/// Filter applied to the case list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFilter {
    #[default]
    All,
    /// Cases assigned to the configured technician.
    Mine,
    /// Cases in a waiting stage (see [`CaseStage::is_waiting`]).
    Waiting,
}

impl std::str::FromStr for CaseFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(CaseFilter::All),
            "mine" => Ok(CaseFilter::Mine),
            // "pending" is accepted as an alias for the waiting bucket.
            "waiting" | "pending" => Ok(CaseFilter::Waiting),
            _ => Err(format!("Unknown case filter: {}", s)),
        }
    }
}

/// Time range selector for the dashboard metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
}

impl TimeRange {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "امروز",
            TimeRange::Week => "۷ روز اخیر",
            TimeRange::Month => "۳۰ روز اخیر",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "today" => Ok(TimeRange::Today),
            "week" | "7d" => Ok(TimeRange::Week),
            "month" | "30d" => Ok(TimeRange::Month),
            _ => Err(format!("Unknown time range: {}", s)),
        }
    }
}

/// Time range selector for the report desk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRange {
    Week,
    #[default]
    Month,
    Quarter,
}

impl ReportRange {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReportRange::Week => "۷ روز اخیر",
            ReportRange::Month => "۳۰ روز اخیر",
            ReportRange::Quarter => "۱۳ هفته گذشته",
        }
    }
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportRange::Week => "week",
            ReportRange::Month => "month",
            ReportRange::Quarter => "quarter",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ReportRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "week" => Ok(ReportRange::Week),
            "month" => Ok(ReportRange::Month),
            "quarter" => Ok(ReportRange::Quarter),
            _ => Err(format!("Unknown report range: {}", s)),
        }
    }
}

/// Calendar display mode. Purely a display-time subset of highlighted days;
/// never filters the underlying event collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Today,
}

impl std::str::FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "today" => Ok(CalendarView::Today),
            _ => Err(format!("Unknown calendar view: {}", s)),
        }
    }
}

/// A unit of field work tracked through stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier (e.g., "case-a1b2")
    pub id: String,

    /// External tracking reference (e.g., "UTN-2045")
    pub external_ref: String,

    /// Case title
    pub title: String,

    /// Assigned technician
    pub technician: String,

    /// Current stage
    #[serde(default)]
    pub stage: CaseStage,

    /// Human-readable SLA / due label
    pub due_label: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Create a new case.
    pub fn new(
        id: String,
        external_ref: String,
        title: String,
        technician: String,
        stage: CaseStage,
        due_label: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            external_ref,
            title,
            technician,
            stage,
            due_label,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A coordination record on the shared team board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier (e.g., "board-a1b2")
    pub id: String,

    /// External tracking reference
    pub external_ref: String,

    /// Item title
    pub title: String,

    /// Owning technician
    pub owner: String,

    /// Current status
    #[serde(default)]
    pub status: BoardStatus,

    /// Physical location
    pub location: String,

    /// Human-readable due label
    pub due_label: String,

    /// Owning channel
    pub channel: Channel,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// An ephemeral urgent action; removed (not archived) on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    /// Unique identifier (e.g., "act-a1b2")
    pub id: String,

    /// Action title
    pub title: String,

    /// Responsible person
    pub owner: String,

    /// Human-readable due label
    pub due_label: String,

    /// Owning channel
    pub channel: Channel,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// An entry on the coordination calendar, keyed by day of the period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier (e.g., "cal-a1b2")
    pub id: String,

    /// Day within the displayed period (1..=period length)
    pub day: u8,

    /// Event label
    pub label: String,

    /// Owning channel; the visual theme derives from this
    pub channel: Channel,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A report document in the publication queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportItem {
    /// Unique identifier (e.g., "rep-a1b2")
    pub id: String,

    /// External tracking reference
    pub external_ref: String,

    /// Report subject
    pub subject: String,

    /// Owning technician
    pub owner: String,

    /// Current stage
    #[serde(default)]
    pub stage: ReportStage,

    /// Human-readable due label
    pub due_label: String,

    /// Owning channel
    pub channel: Channel,

    /// Completeness percentage (0-100)
    pub completeness: u8,

    /// Number of attachments
    pub attachments: u32,

    /// Sensitivity classification
    #[serde(default)]
    pub sensitivity: Sensitivity,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// An independent quality gate check. Not linked to any single report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGate {
    /// Unique identifier (e.g., "gate-a1b2")
    pub id: String,

    /// Gate title
    pub title: String,

    /// Supporting detail
    pub detail: String,

    /// Current status
    #[serde(default)]
    pub status: GateStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A reminder on the report desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier (e.g., "rem-a1b2")
    pub id: String,

    /// Reminder title
    pub title: String,

    /// Responsible person or office
    pub owner: String,

    /// Human-readable due label
    pub due_label: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A free-form note pinned to the workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickNote {
    /// Unique identifier (e.g., "note-a1b2")
    pub id: String,

    /// Note text
    pub text: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A single item in a feature checklist template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Identifier, unique within the (project, feature) template
    pub id: String,

    /// Item label
    pub label: String,

    /// Initial completion state
    pub done: bool,

    /// Optional free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Completion statistics for one (project, feature) checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Total number of checklist items
    pub total: usize,
    /// Number of completed items
    pub completed: usize,
    /// Completion percentage (0-100), rounded
    pub percent: u8,
}

impl Progress {
    /// Create new progress stats. An empty checklist yields `{0, 0, 0}`.
    pub fn new(total: usize, completed: usize) -> Self {
        let percent = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };
        Self {
            total,
            completed,
            percent,
        }
    }
}

/// Per-project approval flags. Monotonic within a session: once requested,
/// never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalState {
    /// Digital stamp requested
    pub stamp_requested: bool,

    /// Electronic signature requested
    pub signature_requested: bool,
}

/// A task inside a journey island.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyTask {
    /// Identifier, unique within the island
    pub id: String,

    /// Task title
    pub title: String,

    /// Responsible person
    pub owner: String,
}

/// A kanban-like grouping of tasks on a workspace tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Island {
    /// Identifier, unique within the tab
    pub id: String,

    /// Island title
    pub title: String,

    /// Ordered task list
    pub tasks: Vec<JourneyTask>,
}

/// A feature surface available on a project workbench.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRef {
    /// Feature identifier (e.g., "overview", "docs", "capa")
    pub id: String,

    /// Persian display label
    pub label: String,
}

/// A project tracked on the workbench tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (e.g., "utn-2045-workbench")
    pub id: String,

    /// External tracking reference
    pub external_ref: String,

    /// Project title
    pub title: String,

    /// Owning technician
    pub owner: String,

    /// Current focus description
    pub focus: String,

    /// Human-readable due label
    pub due_label: String,

    /// Overall progress percentage (0-100)
    pub progress: u8,

    /// Feature surfaces available for this project
    pub features: Vec<FeatureRef>,
}

/// A long-running team stream shown on the overview, with a progress bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStream {
    /// Unique identifier
    pub id: String,

    /// Stream title
    pub title: String,

    /// Current focus description
    pub focus: String,

    /// Stream owner
    pub owner: String,

    /// Progress percentage (0-100)
    pub progress: u8,

    /// Owning channel
    pub channel: Channel,
}

/// Build a due label from optional date and time strings.
///
/// Both parts are free text in the demo data (Persian calendar dates are
/// formatted by an external layer); this is a pure string-formatting rule.
pub fn build_due_label(date: &str, time: &str) -> String {
    let date = date.trim();
    let time = time.trim();
    if !date.is_empty() && !time.is_empty() {
        format!("{} · {}", date, time)
    } else if !date.is_empty() {
        date.to_string()
    } else if !time.is_empty() {
        format!("ساعت {}", time)
    } else {
        NO_DUE_LABEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_stage_serialization() {
        let stage = CaseStage::FieldInspection;
        let json = serde_json::to_string(&stage).unwrap();
        assert_eq!(json, r#""field_inspection""#);

        let deserialized: CaseStage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, CaseStage::FieldInspection);
    }

    #[test]
    fn test_case_stage_from_str() {
        assert_eq!(
            "pending_intake".parse::<CaseStage>().unwrap(),
            CaseStage::PendingIntake
        );
        assert_eq!(
            "awaiting_handover".parse::<CaseStage>().unwrap(),
            CaseStage::AwaitingHandover
        );
        assert!("invalid".parse::<CaseStage>().is_err());
    }

    #[test]
    fn test_case_stage_buckets() {
        assert_eq!(CaseStage::PendingIntake.bucket(), StageBucket::Receive);
        assert_eq!(CaseStage::FieldInspection.bucket(), StageBucket::Field);
        assert_eq!(CaseStage::LabAnalysis.bucket(), StageBucket::Field);
        assert_eq!(CaseStage::AwaitingHandover.bucket(), StageBucket::Handover);
        assert_eq!(CaseStage::Documentation.bucket(), StageBucket::Handover);
    }

    #[test]
    fn test_case_stage_is_waiting() {
        assert!(CaseStage::PendingIntake.is_waiting());
        assert!(CaseStage::AwaitingHandover.is_waiting());
        assert!(!CaseStage::FieldInspection.is_waiting());
        assert!(!CaseStage::Documentation.is_waiting());
    }

    #[test]
    fn test_channel_from_persian_label() {
        assert_eq!("میدانی".parse::<Channel>().unwrap(), Channel::Field);
        assert_eq!("QA".parse::<Channel>().unwrap(), Channel::Qa);
        assert_eq!(
            "مستندسازی".parse::<Channel>().unwrap(),
            Channel::Documentation
        );
    }

    #[test]
    fn test_channel_token_roundtrip() {
        for channel in Channel::all() {
            let token = channel.to_string();
            assert_eq!(token.parse::<Channel>().unwrap(), *channel);
        }
    }

    #[test]
    fn test_report_stage_filter_buckets() {
        assert!(ReportStage::Analyzing.in_filter(ReportStageFilter::Draft));
        assert!(ReportStage::PendingApproval.in_filter(ReportStageFilter::Draft));
        assert!(!ReportStage::ReadyToPublish.in_filter(ReportStageFilter::Draft));
        assert!(ReportStage::ReadyToPublish.in_filter(ReportStageFilter::Ready));
        assert!(ReportStage::Shared.in_filter(ReportStageFilter::Shared));
        for stage in ReportStage::all() {
            assert!(stage.in_filter(ReportStageFilter::All));
        }
    }

    #[test]
    fn test_case_filter_accepts_legacy_pending_key() {
        assert_eq!("pending".parse::<CaseFilter>().unwrap(), CaseFilter::Waiting);
        assert_eq!("waiting".parse::<CaseFilter>().unwrap(), CaseFilter::Waiting);
    }

    #[test]
    fn test_progress_zero_items() {
        let progress = Progress::new(0, 0);
        assert_eq!(
            progress,
            Progress {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(Progress::new(3, 1).percent, 33);
        assert_eq!(Progress::new(3, 2).percent, 67);
        assert_eq!(Progress::new(4, 4).percent, 100);
    }

    #[test]
    fn test_build_due_label() {
        assert_eq!(build_due_label("1403/05/12", "14:30"), "1403/05/12 · 14:30");
        assert_eq!(build_due_label("1403/05/12", ""), "1403/05/12");
        assert_eq!(build_due_label("", "14:30"), "ساعت 14:30");
        assert_eq!(build_due_label("", ""), NO_DUE_LABEL);
        assert_eq!(build_due_label("  ", " "), NO_DUE_LABEL);
    }

    #[test]
    fn test_report_item_serialization_roundtrip() {
        let now = chrono::Utc::now();
        let report = ReportItem {
            id: "rep-a1b2".to_string(),
            external_ref: "UTN-2045".to_string(),
            subject: "ممیزی لرزش بدنه".to_string(),
            owner: "ندا شریفی".to_string(),
            stage: ReportStage::PendingApproval,
            due_label: "امروز · ۱۸:۰۰".to_string(),
            channel: Channel::Qa,
            completeness: 78,
            attachments: 6,
            sensitivity: Sensitivity::Confidential,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ReportItem = serde_json::from_str(&json).unwrap();
        assert_eq!(report.id, deserialized.id);
        assert_eq!(report.stage, deserialized.stage);
        assert_eq!(report.sensitivity, deserialized.sensitivity);
    }
}
