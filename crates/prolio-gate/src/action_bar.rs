//! Approve / reject controls.

use prolio_core::enums::EntityStatus;
use serde::Serialize;

use crate::controller::GateController;
use crate::modal::ConfirmationModal;
use crate::profile::GateProfile;

/// Enabled state of the two actions, derived on every render. An action is
/// disabled when the entity's current status cannot move to its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionBar {
    pub approve_label: String,
    pub approve_enabled: bool,
    pub reject_label: String,
    pub reject_enabled: bool,
}

impl ActionBar {
    #[must_use]
    pub fn derive(
        profile: &GateProfile,
        status: EntityStatus,
        controller: &GateController,
        modal: &ConfirmationModal,
    ) -> Self {
        let submitting = modal.is_submitting();
        Self {
            approve_label: profile.approve_label.clone(),
            approve_enabled: controller.is_approvable()
                && status.can_transition_to(profile.approve_target)
                && !submitting,
            reject_label: profile.reject_label.clone(),
            reject_enabled: status.can_transition_to(EntityStatus::Rejected) && !submitting,
        }
    }
}
