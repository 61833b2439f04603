//! `prolio review`: walk an entity through its verification gate.

mod console;
mod input;

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use prolio_core::filter::EntityFilter;
use prolio_core::responses::RemoteReply;
use prolio_gate::{
    ConfirmOutcome, EntityTable, GateProfile, GateSession, ModalMode, ModalPhase, Notifier,
    TracingNotifier,
};

use crate::cli::{GlobalFlags, OutputFormat, ReviewArgs};
use crate::context::AppContext;
use crate::output::output_to;
use crate::progress::Spinner;
use crate::ui;

pub use console::ConsoleNotifier;
use input::{HELP, ReviewInput};

/// How the prompt loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewExit {
    Completed(RemoteReply),
    Quit,
}

/// Handle `prolio review`.
pub async fn handle(args: &ReviewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = GateProfile::from_name(&args.profile)?;
    let kind = profile.kind;
    let prefs = ui::prefs();
    // --quiet routes notices through the log filter instead of stderr.
    let notifier: Arc<dyn Notifier> = if flags.quiet {
        Arc::new(TracingNotifier)
    } else {
        Arc::new(ConsoleNotifier::new(prefs.notice_color))
    };

    let spinner = Spinner::start(format!("loading {kind} {}", args.id));
    let opened = GateSession::open(
        ctx.api.clone(),
        notifier.clone(),
        profile,
        &args.id,
        ctx.gate_settings(),
    )
    .await;
    spinner.stop();
    let mut session =
        opened.with_context(|| format!("failed to open review for {kind} '{}'", args.id))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let exit = run_loop(
        &mut session,
        &mut stdin.lock(),
        &mut stdout.lock(),
        flags.format,
        prefs.table_color,
    )
    .await?;

    if matches!(exit, ReviewExit::Completed(_)) {
        let mut table = EntityTable::new(
            ctx.api.clone(),
            notifier,
            kind,
            ctx.fallback_error_message(),
        )
        .with_filter(EntityFilter::default().with_search(args.id.clone()));
        if table.refresh().await
            && let Some(row) = table.rows().iter().find(|row| row.id == args.id)
        {
            println!("{kind} {} is now {}", row.id, row.status);
        }
    }
    Ok(())
}

fn print_view<W: Write>(
    out: &mut W,
    session: &GateSession,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", console::render_view(&session.view(), color))?;
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output_to(out, &session.view(), format),
    }
}

/// Read commands from `input` until the review completes or the reviewer quits.
pub async fn run_loop<R: BufRead, W: Write>(
    session: &mut GateSession,
    input: &mut R,
    out: &mut W,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<ReviewExit> {
    print_view(out, session, format, color)?;
    let mut line = String::new();

    loop {
        write!(out, "review> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(ReviewExit::Quit);
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReviewInput>() {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "{error}")?;
                continue;
            }
        };

        match command {
            ReviewInput::Open(index) => {
                if session.open_step(index).is_ok() {
                    print_view(out, session, format, color)?;
                } else {
                    let total = session.controller().len();
                    writeln!(out, "no step {} (checklist has {total} steps)", index + 1)?;
                }
            }
            ReviewInput::Verify => {
                if session.verify_open_step().is_some() {
                    print_view(out, session, format, color)?;
                } else {
                    writeln!(out, "open a step first")?;
                }
            }
            ReviewInput::Preview(index) => {
                if session.preview_document(index) {
                    print_view(out, session, format, color)?;
                } else {
                    writeln!(out, "no image {} in the open step", index + 1)?;
                }
            }
            ReviewInput::Close => {
                if session.preview().is_open() {
                    session.close_preview();
                    print_view(out, session, format, color)?;
                } else {
                    writeln!(out, "nothing to close")?;
                }
            }
            ReviewInput::Approve => {
                if session.modal().is_visible() {
                    writeln!(out, "a dialog is already open (confirm or cancel it first)")?;
                } else if session.request_approve() {
                    print_view(out, session, format, color)?;
                }
            }
            ReviewInput::Reject => {
                if session.modal().is_visible() {
                    writeln!(out, "a dialog is already open (confirm or cancel it first)")?;
                } else if session.request_reject() {
                    print_view(out, session, format, color)?;
                }
            }
            ReviewInput::Reason(text) => {
                let modal = session.modal();
                if modal.phase() == ModalPhase::Shown && modal.mode() == ModalMode::Reject {
                    session.set_reason(text);
                    writeln!(out, "reason set")?;
                } else {
                    writeln!(out, "no rejection in progress (type 'reject' first)")?;
                }
            }
            ReviewInput::Confirm => match session.confirm().await {
                Ok(ConfirmOutcome::Completed(reply)) => return Ok(ReviewExit::Completed(reply)),
                Ok(ConfirmOutcome::Failed(_)) => print_view(out, session, format, color)?,
                Err(error) => writeln!(out, "{error}")?,
            },
            ReviewInput::Cancel => {
                if session.cancel() {
                    print_view(out, session, format, color)?;
                } else {
                    writeln!(out, "nothing to cancel")?;
                }
            }
            ReviewInput::Status => print_view(out, session, format, color)?,
            ReviewInput::Help => writeln!(out, "{HELP}")?,
            ReviewInput::Quit => return Ok(ReviewExit::Quit),
        }
    }
}
