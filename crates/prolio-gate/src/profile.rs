//! Per-entity gate configuration.
//!
//! One gate implementation serves every review flow; a profile supplies the
//! entity kind, the status the approve action moves to, the action labels and
//! the checklist.

use prolio_core::checklist::ChecklistTemplate;
use prolio_core::enums::{EntityKind, EntityStatus};
use serde::{Deserialize, Serialize};

use crate::error::GateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateProfile {
    pub name: String,
    pub kind: EntityKind,
    /// Status requested by the approve action.
    pub approve_target: EntityStatus,
    pub approve_label: String,
    pub reject_label: String,
    /// Verb used in confirmation prompts, e.g. "verify" or "block".
    pub approve_verb: String,
    pub checklist: ChecklistTemplate,
}

impl GateProfile {
    pub const BUILTIN_NAMES: [&'static str; 5] = [
        "company-verification",
        "influencer-verification",
        "product-review",
        "banner-block",
        "banner-unblock",
    ];

    fn new(
        name: &str,
        kind: EntityKind,
        approve_target: EntityStatus,
        approve_label: &str,
        approve_verb: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            approve_target,
            approve_label: approve_label.to_string(),
            reject_label: "Reject".to_string(),
            approve_verb: approve_verb.to_string(),
            checklist: ChecklistTemplate::for_kind(kind),
        }
    }

    /// Look up a built-in profile by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        let profile = match name {
            "company-verification" => Self::new(
                name,
                EntityKind::Company,
                EntityStatus::Verified,
                "Verify",
                "verify",
            ),
            "influencer-verification" => Self::new(
                name,
                EntityKind::Influencer,
                EntityStatus::Verified,
                "Verify",
                "verify",
            ),
            "product-review" => Self::new(
                name,
                EntityKind::Product,
                EntityStatus::Verified,
                "Approve",
                "approve",
            ),
            "banner-block" => Self::new(
                name,
                EntityKind::Banner,
                EntityStatus::Blocked,
                "Block",
                "block",
            ),
            "banner-unblock" => Self::new(
                name,
                EntityKind::Banner,
                EntityStatus::Verified,
                "Unblock",
                "unblock",
            ),
            _ => return None,
        };
        Some(profile)
    }

    /// Like [`GateProfile::builtin`], but an unknown name is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::UnknownProfile`] if `name` is not built in.
    pub fn from_name(name: &str) -> Result<Self, GateError> {
        Self::builtin(name).ok_or_else(|| GateError::UnknownProfile(name.to_string()))
    }

    #[must_use]
    pub fn builtins() -> Vec<Self> {
        Self::BUILTIN_NAMES
            .iter()
            .filter_map(|name| Self::builtin(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("company-verification", EntityKind::Company, EntityStatus::Verified)]
    #[case("influencer-verification", EntityKind::Influencer, EntityStatus::Verified)]
    #[case("product-review", EntityKind::Product, EntityStatus::Verified)]
    #[case("banner-block", EntityKind::Banner, EntityStatus::Blocked)]
    #[case("banner-unblock", EntityKind::Banner, EntityStatus::Verified)]
    fn builtin_profiles(
        #[case] name: &str,
        #[case] kind: EntityKind,
        #[case] target: EntityStatus,
    ) {
        let profile = GateProfile::from_name(name).unwrap();
        assert_eq!(profile.kind, kind);
        assert_eq!(profile.approve_target, target);
        assert_eq!(profile.checklist, ChecklistTemplate::for_kind(kind));
    }

    #[test]
    fn every_builtin_name_resolves() {
        assert_eq!(GateProfile::builtins().len(), GateProfile::BUILTIN_NAMES.len());
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = GateProfile::from_name("company-delete").unwrap_err();
        assert_eq!(err.to_string(), "unknown review profile: company-delete");
    }
}
