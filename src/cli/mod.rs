//! CLI argument definitions for the workspace tool.

use clap::{Parser, Subcommand};

/// Bosun - a technician workspace over embedded demo data.
///
/// Start with `bsn orient` to see the workspace, then drill into a
/// collection (`bsn case list`, `bsn report list`, ...). State is
/// session-scoped: every run starts from the seeded demo records.
#[derive(Parser, Debug)]
#[command(name = "bsn")]
#[command(author, version, about = "A technician workspace state manager", long_about = None)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("BSN_GIT_COMMIT"), " ", env!("BSN_BUILD_TIMESTAMP"), ")"
))]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Technician identity used by the "mine" case filter.
    /// Can also be set via BOSUN_TECHNICIAN or the config file.
    #[arg(long, global = true)]
    pub technician: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the workspace overview (start here!)
    Orient,

    /// Case workflow commands
    Case {
        #[command(subcommand)]
        command: CaseCommands,
    },

    /// Team board commands
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },

    /// Urgent action commands
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },

    /// Coordination calendar commands
    Calendar {
        #[command(subcommand)]
        command: CalendarCommands,
    },

    /// Feature checklist commands
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },

    /// Workbench project commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Report queue commands
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },

    /// Quality gate commands
    Gate {
        #[command(subcommand)]
        command: GateCommands,
    },

    /// Report desk reminder commands
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },

    /// Quick note commands
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// List the long-running team streams
    Stream,

    /// Journey island commands
    Journey {
        #[command(subcommand)]
        command: JourneyCommands,
    },

    /// Dashboard metrics for a time range
    Metrics {
        /// Time range (today, week, month)
        #[arg(short, long, default_value = "today")]
        range: String,
    },
}

/// Case subcommands
#[derive(Subcommand, Debug)]
pub enum CaseCommands {
    /// List cases under a filter key
    List {
        /// Filter: all, mine, or waiting
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Add a case to the workflow
    Add {
        /// Case title
        title: String,

        /// Assigned technician (defaults to the resolved identity)
        #[arg(short = 'a', long)]
        assignee: Option<String>,

        /// Initial stage
        #[arg(short, long, default_value = "pending_intake")]
        stage: String,

        /// Due date text
        #[arg(long, default_value = "")]
        date: String,

        /// Due time text
        #[arg(long, default_value = "")]
        time: String,
    },

    /// Move a case to a new stage
    Stage {
        /// Case id
        id: String,

        /// New stage (pending_intake, field_inspection, lab_analysis,
        /// awaiting_handover, documentation)
        stage: String,
    },
}

/// Team board subcommands
#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// List board items
    List {
        /// Restrict to one channel
        #[arg(short, long)]
        channel: Option<String>,
    },

    /// Update the status of a board item
    Status {
        /// Board item id
        id: String,

        /// New status (in_progress, awaiting_qa, ready_to_ship,
        /// needs_info, delivered)
        status: String,
    },
}

/// Urgent action subcommands
#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    /// List urgent actions
    List,

    /// Record an urgent action
    Add {
        /// Action title
        title: String,

        /// Responsible person
        #[arg(short, long, default_value = "")]
        owner: String,

        /// Due date text
        #[arg(long, default_value = "")]
        date: String,

        /// Due time text
        #[arg(long, default_value = "")]
        time: String,

        /// Owning channel
        #[arg(short, long, default_value = "field")]
        channel: String,
    },

    /// Complete (remove) an urgent action
    Complete {
        /// Action id
        id: String,
    },
}

/// Calendar subcommands
#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// List events, optionally for one day
    List {
        /// Only events on this day
        #[arg(short, long)]
        day: Option<u8>,

        /// View mode (month, week, today); only affects highlighted days
        #[arg(short, long, default_value = "month")]
        view: String,

        /// Selected day the view mode is anchored on
        #[arg(short, long)]
        selected: Option<u8>,
    },

    /// Add an event
    Add {
        /// Event label
        label: String,

        /// Day within the period (1-30)
        #[arg(short, long)]
        day: u8,

        /// Owning channel
        #[arg(short, long, default_value = "field")]
        channel: String,
    },

    /// Remove an event
    Remove {
        /// Event id
        id: String,
    },
}

/// Checklist subcommands
#[derive(Subcommand, Debug)]
pub enum ChecklistCommands {
    /// Show a (project, feature) checklist with completion stats
    Show {
        /// Project id (e.g., utn-2045-workbench)
        project: String,

        /// Feature id (e.g., overview, docs, capa)
        feature: String,
    },

    /// Toggle one checklist item
    Toggle {
        /// Project id
        project: String,

        /// Feature id
        feature: String,

        /// Checklist item id
        item: String,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects with approvals and per-feature progress
    List,

    /// Request an approval for a project
    Approve {
        /// Project id
        project: String,

        /// Approval kind: stamp or signature
        kind: String,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List the report queue under filters
    List {
        /// Restrict to one channel
        #[arg(short, long)]
        channel: Option<String>,

        /// Status bucket: all, draft, ready, shared
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Free-text search on reference and subject
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Create a report in the queue
    Create {
        /// Report subject
        subject: String,

        /// Owning technician (defaults to the resolved identity)
        #[arg(short, long)]
        owner: Option<String>,

        /// Owning channel
        #[arg(short, long, default_value = "qa")]
        channel: String,

        /// Initial stage
        #[arg(short, long, default_value = "analyzing")]
        stage: String,

        /// Due date text
        #[arg(long, default_value = "")]
        date: String,

        /// Due time text
        #[arg(long, default_value = "")]
        time: String,

        /// Completeness percentage (0-100)
        #[arg(long, default_value_t = 60)]
        completeness: u8,

        /// Attachment count
        #[arg(long, default_value_t = 0)]
        attachments: u32,

        /// Sensitivity: normal or confidential
        #[arg(long, default_value = "normal")]
        sensitivity: String,
    },

    /// Set a report's stage (manual override)
    Stage {
        /// Report id
        id: String,

        /// New stage (analyzing, pending_approval, ready_to_publish, shared)
        stage: String,
    },

    /// Toggle a report's share membership
    Share {
        /// Report id
        id: String,
    },

    /// Export the filtered queue view to CSV
    Export {
        /// Restrict to one channel
        #[arg(short, long)]
        channel: Option<String>,

        /// Status bucket: all, draft, ready, shared
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Free-text search on reference and subject
        #[arg(long, default_value = "")]
        search: String,

        /// Time range key for the filename (week, month, quarter)
        #[arg(short, long, default_value = "month")]
        range: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: std::path::PathBuf,
    },

    /// Write the plain-text summary of one report
    Summary {
        /// Report id
        id: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: std::path::PathBuf,
    },
}

/// Quality gate subcommands
#[derive(Subcommand, Debug)]
pub enum GateCommands {
    /// List quality gates
    List,

    /// Add a quality gate
    Add {
        /// Gate title
        title: String,

        /// Supporting detail
        #[arg(short, long, default_value = "")]
        detail: String,

        /// Status: passed, pending, warning
        #[arg(short, long, default_value = "pending")]
        status: String,
    },
}

/// Reminder subcommands
#[derive(Subcommand, Debug)]
pub enum ReminderCommands {
    /// List reminders
    List,

    /// Add a reminder
    Add {
        /// Reminder title
        title: String,

        /// Responsible person or office
        #[arg(short, long, default_value = "")]
        owner: String,

        /// Due label text
        #[arg(long, default_value = "")]
        due: String,
    },
}

/// Quick note subcommands
#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// List quick notes
    List,

    /// Pin a quick note
    Add {
        /// Note text
        text: String,
    },
}

/// Journey subcommands
#[derive(Subcommand, Debug)]
pub enum JourneyCommands {
    /// List the islands of a tab
    List {
        /// Workspace tab (defaults to the overview tab)
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Move a task to a new position within its island
    Reorder {
        /// Island id
        island: String,

        /// Task id
        task: String,

        /// Target index (clamped to the valid range)
        index: usize,

        /// Workspace tab (defaults to the overview tab)
        #[arg(short, long)]
        tab: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_case_stage() {
        let cli = Cli::parse_from(["bsn", "case", "stage", "wf-1", "documentation"]);
        match cli.command {
            Some(Commands::Case {
                command: CaseCommands::Stage { id, stage },
            }) => {
                assert_eq!(id, "wf-1");
                assert_eq!(stage, "documentation");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bsn", "case", "list", "-H", "--technician", "ندا شریفی"]);
        assert!(cli.human_readable);
        assert_eq!(cli.technician.as_deref(), Some("ندا شریفی"));
    }
}
