//! Bosun CLI - a technician workspace over embedded demo data.

use bosun::cli::{
    ActionCommands, BoardCommands, CalendarCommands, CaseCommands, ChecklistCommands, Cli,
    Commands, GateCommands, JourneyCommands, NoteCommands, ProjectCommands, ReminderCommands,
    ReportCommands,
};
use bosun::commands::{self, output, ReportCreateArgs};
use bosun::config::{self, OutputFormat, WorkspaceConfig};
use bosun::workspace::Workspace;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match WorkspaceConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            // The config file is optional, but a malformed one should not
            // be silently ignored.
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let human = matches!(
        config::resolve_output(cli.human_readable, &config),
        OutputFormat::Human
    );
    let env_technician = std::env::var(config::TECHNICIAN_ENV).ok();
    let technician = config::resolve_technician(
        cli.technician.as_deref(),
        env_technician.as_deref(),
        &config,
    );

    // Session-scoped state: every run starts from the embedded demo seed.
    let mut ws = Workspace::seeded();

    if let Err(e) = run_command(cli.command, &mut ws, &technician, human) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!(r#"{{"error": "{}"}}"#, e);
        }
        process::exit(1);
    }
}

fn run_command(
    command: Option<Commands>,
    ws: &mut Workspace,
    technician: &str,
    human: bool,
) -> bosun::Result<()> {
    match command {
        // `bsn` with no subcommand orients, matching the workflow the help
        // text suggests.
        None | Some(Commands::Orient) => output(&commands::orient(ws, technician), human),

        Some(Commands::Case { command }) => match command {
            CaseCommands::List { filter } => {
                output(&commands::case_list(ws, &filter, technician)?, human)
            }
            CaseCommands::Add {
                title,
                assignee,
                stage,
                date,
                time,
            } => {
                let assignee = assignee.as_deref().unwrap_or(technician);
                output(
                    &commands::case_add(ws, &title, assignee, &stage, &date, &time)?,
                    human,
                )
            }
            CaseCommands::Stage { id, stage } => {
                output(&commands::case_stage(ws, &id, &stage)?, human)
            }
        },

        Some(Commands::Board { command }) => match command {
            BoardCommands::List { channel } => {
                output(&commands::board_list(ws, channel.as_deref())?, human)
            }
            BoardCommands::Status { id, status } => {
                output(&commands::board_status(ws, &id, &status)?, human)
            }
        },

        Some(Commands::Action { command }) => match command {
            ActionCommands::List => output(&commands::action_list(ws), human),
            ActionCommands::Add {
                title,
                owner,
                date,
                time,
                channel,
            } => output(
                &commands::action_add(ws, &title, &owner, &date, &time, &channel)?,
                human,
            ),
            ActionCommands::Complete { id } => {
                output(&commands::action_complete(ws, &id)?, human)
            }
        },

        Some(Commands::Calendar { command }) => match command {
            CalendarCommands::List {
                day,
                view,
                selected,
            } => output(&commands::calendar_list(ws, day, &view, selected)?, human),
            CalendarCommands::Add {
                label,
                day,
                channel,
            } => output(&commands::calendar_add(ws, &label, day, &channel)?, human),
            CalendarCommands::Remove { id } => {
                output(&commands::calendar_remove(ws, &id)?, human)
            }
        },

        Some(Commands::Checklist { command }) => match command {
            ChecklistCommands::Show { project, feature } => {
                output(&commands::checklist_show(ws, &project, &feature), human)
            }
            ChecklistCommands::Toggle {
                project,
                feature,
                item,
            } => output(
                &commands::checklist_toggle(ws, &project, &feature, &item)?,
                human,
            ),
        },

        Some(Commands::Project { command }) => match command {
            ProjectCommands::List => output(&commands::project_list(ws), human),
            ProjectCommands::Approve { project, kind } => {
                output(&commands::project_approve(ws, &project, &kind)?, human)
            }
        },

        Some(Commands::Report { command }) => match command {
            ReportCommands::List {
                channel,
                status,
                search,
            } => output(
                &commands::report_list(ws, channel.as_deref(), &status, &search)?,
                human,
            ),
            ReportCommands::Create {
                subject,
                owner,
                channel,
                stage,
                date,
                time,
                completeness,
                attachments,
                sensitivity,
            } => {
                let owner = owner.as_deref().unwrap_or(technician);
                output(
                    &commands::report_create(
                        ws,
                        ReportCreateArgs {
                            subject: &subject,
                            owner,
                            channel: &channel,
                            stage: &stage,
                            due_date: &date,
                            due_time: &time,
                            completeness,
                            attachments,
                            sensitivity: &sensitivity,
                        },
                    )?,
                    human,
                )
            }
            ReportCommands::Stage { id, stage } => {
                output(&commands::report_stage(ws, &id, &stage)?, human)
            }
            ReportCommands::Share { id } => output(&commands::report_share(ws, &id)?, human),
            ReportCommands::Export {
                channel,
                status,
                search,
                range,
                out,
            } => output(
                &commands::report_export(ws, channel.as_deref(), &status, &search, &range, &out)?,
                human,
            ),
            ReportCommands::Summary { id, out } => {
                output(&commands::report_summary(ws, &id, &out)?, human)
            }
        },

        Some(Commands::Gate { command }) => match command {
            GateCommands::List => output(&commands::gate_list(ws), human),
            GateCommands::Add {
                title,
                detail,
                status,
            } => output(&commands::gate_add(ws, &title, &detail, &status)?, human),
        },

        Some(Commands::Reminder { command }) => match command {
            ReminderCommands::List => output(&commands::reminder_list(ws), human),
            ReminderCommands::Add { title, owner, due } => {
                output(&commands::reminder_add(ws, &title, &owner, &due)?, human)
            }
        },

        Some(Commands::Note { command }) => match command {
            NoteCommands::List => output(&commands::note_list(ws), human),
            NoteCommands::Add { text } => output(&commands::note_add(ws, &text)?, human),
        },

        Some(Commands::Stream) => output(&commands::stream_list(ws), human),

        Some(Commands::Journey { command }) => match command {
            JourneyCommands::List { tab } => {
                output(&commands::journey_list(ws, tab.as_deref())?, human)
            }
            JourneyCommands::Reorder {
                island,
                task,
                index,
                tab,
            } => output(
                &commands::journey_reorder(ws, tab.as_deref(), &island, &task, index)?,
                human,
            ),
        },

        Some(Commands::Metrics { range }) => output(&commands::metrics_for(&range)?, human),
    }
    Ok(())
}
