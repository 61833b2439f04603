use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List entities of one kind.
    List(ListArgs),
    /// Show an entity with its review checklist.
    Show(ShowArgs),
    /// Review an entity interactively through a verification gate.
    Review(ReviewArgs),
    /// Check a banner image against the configured dimensions.
    CheckImage(CheckImageArgs),
    /// List the built-in review profiles.
    Profiles,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// company, banner, influencer or product
    pub kind: String,
    /// pending, verified, rejected or blocked
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive match on name or id
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub kind: String,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Review profile, e.g. company-verification or banner-block
    pub profile: String,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CheckImageArgs {
    pub path: PathBuf,
    /// Expected width in pixels (defaults to config)
    #[arg(long)]
    pub width: Option<u32>,
    /// Expected height in pixels (defaults to config)
    #[arg(long)]
    pub height: Option<u32>,
    /// Require the exact size
    #[arg(long, conflicts_with = "at_least")]
    pub exact: bool,
    /// Accept anything at least the expected size
    #[arg(long)]
    pub at_least: bool,
}
