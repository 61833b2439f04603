//! Text rendering of a review for the terminal.

use std::fmt::Write as _;

use prolio_gate::{
    DocumentTile, GateView, ModalMode, ModalPhase, Notice, NoticeLevel, Notifier, StepBody,
};

use crate::output::table::colorize_status;

/// Writes notices to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    color: bool,
}

impl ConsoleNotifier {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = ?notice.level, message = %notice.message, "notice");
        eprintln!("{}", format_notice(&notice, self.color));
    }
}

pub fn format_notice(notice: &Notice, color: bool) -> String {
    let label = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    let label = if color {
        colorize_status(label)
    } else {
        label.to_string()
    };
    format!("{label}: {}", notice.message)
}

fn document_line(out: &mut String, number: usize, tile: &DocumentTile) {
    let _ = match tile {
        DocumentTile::Pdf { name, open_url } => {
            writeln!(out, "       {number}. {name} [pdf] open: {open_url}")
        }
        DocumentTile::Image { name, url } => {
            writeln!(out, "       {number}. {name} [image] {url} (preview {number})")
        }
    };
}

/// Checklist, actions and any open dialog, as plain text.
pub fn render_view(view: &GateView, color: bool) -> String {
    let mut out = String::new();
    let status = if color {
        colorize_status(view.status.as_str())
    } else {
        view.status.to_string()
    };
    let _ = writeln!(
        out,
        "{} {} - {} [{status}]  {}/{} verified",
        view.kind, view.id, view.name, view.completed, view.total
    );

    for step in &view.steps {
        let mark = if step.completed { "x" } else { " " };
        let caret = if step.expanded { ">" } else { " " };
        let _ = writeln!(out, "{caret} [{mark}] {}. {}", step.index + 1, step.title);
        match &step.body {
            Some(StepBody::Fields(pairs)) => {
                for (label, value) in pairs {
                    let _ = writeln!(out, "       {label}: {value}");
                }
            }
            Some(StepBody::Documents(tiles)) if tiles.is_empty() => {
                let _ = writeln!(out, "       (no documents)");
            }
            Some(StepBody::Documents(tiles)) => {
                for (i, tile) in tiles.iter().enumerate() {
                    document_line(&mut out, i + 1, tile);
                }
            }
            None => {}
        }
        if let Some(action) = step.action {
            let _ = writeln!(out, "       -> {action} (verify)");
        }
    }

    if let Some(preview) = &view.preview {
        let _ = writeln!(out, "previewing {}: {} (close)", preview.name(), preview.url());
    }

    let approve = if view.actions.approve_enabled {
        view.actions.approve_label.clone()
    } else {
        format!("{} (disabled)", view.actions.approve_label)
    };
    let reject = if view.actions.reject_enabled {
        view.actions.reject_label.clone()
    } else {
        format!("{} (disabled)", view.actions.reject_label)
    };
    let _ = writeln!(out, "actions: {approve} | {reject}");

    match (view.modal_phase, view.modal_mode) {
        (ModalPhase::Shown, ModalMode::Approve) => {
            let _ = writeln!(
                out,
                "confirm {} for {}? (confirm / cancel)",
                view.approve_verb, view.name
            );
        }
        (ModalPhase::Shown, ModalMode::Reject) => {
            let _ = writeln!(
                out,
                "reject {}? set a reason with 'reason TEXT', then confirm / cancel",
                view.name
            );
        }
        (ModalPhase::Submitting, _) => {
            let _ = writeln!(out, "submitting...");
        }
        _ => {}
    }

    out.trim_end().to_string()
}
