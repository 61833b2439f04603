//! Entity kinds, status enums, and document kinds for Prolio.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`EntityStatus`] provides `allowed_next_states()` so transitions can be
//! rejected locally before any remote call is made.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kind of marketplace record managed from the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Company,
    Banner,
    Influencer,
    Product,
}

impl EntityKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 4] = [Self::Company, Self::Banner, Self::Influencer, Self::Product];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Banner => "banner",
            Self::Influencer => "influencer",
            Self::Product => "product",
        }
    }

    /// REST collection segment for this kind (e.g. `companies`).
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Company => "companies",
            Self::Banner => "banners",
            Self::Influencer => "influencers",
            Self::Product => "products",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityStatus
// ---------------------------------------------------------------------------

/// Status of a marketplace entity in the remote system of record.
///
/// ```text
/// pending → verified → blocked → verified (unblocked)
///         → rejected → pending (resubmitted)
/// ```
///
/// The API reports banners as `active`/`inactive`; those deserialize to
/// `Verified` and `Rejected` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Pending,
    #[serde(alias = "active")]
    Verified,
    #[serde(alias = "inactive")]
    Rejected,
    Blocked,
}

impl EntityStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Verified, Self::Rejected],
            Self::Verified => &[Self::Blocked, Self::Rejected],
            Self::Blocked => &[Self::Verified, Self::Rejected],
            Self::Rejected => &[Self::Pending],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// How an uploaded document is presented during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Image,
}

impl DocumentKind {
    /// Classify a document URL or file name by its extension.
    ///
    /// Query strings and fragments are ignored. Anything that is not a `.pdf`
    /// is treated as an image.
    #[must_use]
    pub fn classify(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or(location);
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rsplit_once('.') {
            Some((_, ext)) if ext.eq_ignore_ascii_case("pdf") => Self::Pdf,
            _ => Self::Image,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn pending_can_be_verified_or_rejected() {
        assert!(EntityStatus::Pending.can_transition_to(EntityStatus::Verified));
        assert!(EntityStatus::Pending.can_transition_to(EntityStatus::Rejected));
        assert!(!EntityStatus::Pending.can_transition_to(EntityStatus::Blocked));
    }

    #[test]
    fn block_and_unblock_cycle() {
        assert!(EntityStatus::Verified.can_transition_to(EntityStatus::Blocked));
        assert!(EntityStatus::Blocked.can_transition_to(EntityStatus::Verified));
        assert!(!EntityStatus::Blocked.can_transition_to(EntityStatus::Blocked));
    }

    #[rstest]
    #[case(EntityStatus::Pending, true)]
    #[case(EntityStatus::Verified, true)]
    #[case(EntityStatus::Blocked, true)]
    #[case(EntityStatus::Rejected, false)]
    fn rejection_reachable_until_rejected(#[case] from: EntityStatus, #[case] allowed: bool) {
        assert_eq!(from.can_transition_to(EntityStatus::Rejected), allowed);
    }

    #[test]
    fn active_and_inactive_aliases_deserialize() {
        let active: EntityStatus = serde_json::from_str("\"active\"").unwrap();
        let inactive: EntityStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(active, EntityStatus::Verified);
        assert_eq!(inactive, EntityStatus::Rejected);
        assert_eq!(serde_json::to_string(&active).unwrap(), "\"verified\"");
    }

    #[rstest]
    #[case("https://cdn.prolio.test/docs/gst.pdf", DocumentKind::Pdf)]
    #[case("https://cdn.prolio.test/docs/GST.PDF?sig=abc", DocumentKind::Pdf)]
    #[case("pan-card.jpeg", DocumentKind::Image)]
    #[case("https://cdn.prolio.test/img/logo.png#top", DocumentKind::Image)]
    #[case("https://cdn.prolio.test/pdf/scan", DocumentKind::Image)]
    fn classifies_documents_by_extension(#[case] location: &str, #[case] expected: DocumentKind) {
        assert_eq!(DocumentKind::classify(location), expected);
    }

    #[test]
    fn collections_are_plural() {
        let collections: Vec<&str> = EntityKind::ALL.iter().map(|k| k.collection()).collect();
        assert_eq!(
            collections,
            vec!["companies", "banners", "influencers", "products"]
        );
    }
}
