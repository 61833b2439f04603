//! Commands accepted by the interactive review prompt.

use std::str::FromStr;

use anyhow::{Context, bail};

pub const HELP: &str = "\
commands:
  open N       expand step N (again to collapse)
  verify       verify the expanded step and continue
  preview N    preview image N of the expanded step
  close        close the image preview
  approve      ask to approve (all steps must be verified)
  reject       ask to reject
  reason TEXT  set the rejection reason
  confirm      send the pending approve or reject
  cancel       close the confirmation
  status       show the checklist
  help         show this help
  quit         leave without changes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewInput {
    /// Zero-based step index.
    Open(usize),
    Verify,
    /// Zero-based document index.
    Preview(usize),
    Close,
    Approve,
    Reject,
    Reason(String),
    Confirm,
    Cancel,
    Status,
    Help,
    Quit,
}

/// Parse a one-based position typed by the reviewer.
fn position(arg: &str, what: &str) -> anyhow::Result<usize> {
    let number: usize = arg
        .parse()
        .with_context(|| format!("{what} must be a number, got '{arg}'"))?;
    number
        .checked_sub(1)
        .with_context(|| format!("{what} numbers start at 1"))
}

impl FromStr for ReviewInput {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));

        let input = match (command.to_ascii_lowercase().as_str(), rest) {
            ("open", arg) if !arg.is_empty() => Self::Open(position(arg, "step")?),
            ("preview", arg) if !arg.is_empty() => Self::Preview(position(arg, "document")?),
            ("reason", text) => Self::Reason(text.to_string()),
            ("verify", "") => Self::Verify,
            ("close", "") => Self::Close,
            ("approve", "") => Self::Approve,
            ("reject", "") => Self::Reject,
            ("confirm", "") => Self::Confirm,
            ("cancel", "") => Self::Cancel,
            ("status", "") => Self::Status,
            ("help" | "?", "") => Self::Help,
            ("quit" | "exit", "") => Self::Quit,
            ("open" | "preview", _) => bail!("usage: {command} N"),
            _ => bail!("unknown command '{line}' (type 'help')"),
        };
        Ok(input)
    }
}
