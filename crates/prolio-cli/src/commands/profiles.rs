use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_gate::GateProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileSummary {
    name: String,
    kind: EntityKind,
    approve: String,
    target: EntityStatus,
    steps: Vec<String>,
}

impl From<GateProfile> for ProfileSummary {
    fn from(profile: GateProfile) -> Self {
        Self {
            steps: profile
                .checklist
                .steps
                .iter()
                .map(|step| step.title.clone())
                .collect(),
            name: profile.name,
            kind: profile.kind,
            approve: profile.approve_label,
            target: profile.approve_target,
        }
    }
}

/// Handle `prolio profiles`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let profiles = GateProfile::builtins()
        .into_iter()
        .map(ProfileSummary::from)
        .collect::<Vec<_>>();
    output(&profiles, flags.format)
}
