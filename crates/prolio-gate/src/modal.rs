//! Confirmation modal state machine.
//!
//! ```text
//! Hidden ──show──▶ Shown ──begin_submit──▶ Submitting ──finish_success──▶ Success ──hide──▶ Hidden
//!                  ▲  │                        │
//!                  │  └──cancel──▶ Hidden      └──finish_failure──▶ Shown
//! ```

use serde::Serialize;

use crate::error::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalPhase {
    Hidden,
    Shown,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalMode {
    Approve,
    Reject,
}

/// The request a confirm turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Approve,
    Reject { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfirmationModal {
    phase: ModalPhase,
    mode: ModalMode,
    reason: String,
    close_container_id: String,
}

impl ConfirmationModal {
    #[must_use]
    pub fn new(close_container_id: impl Into<String>) -> Self {
        Self {
            phase: ModalPhase::Hidden,
            mode: ModalMode::Approve,
            reason: String::new(),
            close_container_id: close_container_id.into(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub const fn mode(&self) -> ModalMode {
        self.mode
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    /// Open the modal in `mode` with an empty reason.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::AlreadySubmitting`] while a request is in flight.
    pub fn show(&mut self, mode: ModalMode) -> Result<(), GateError> {
        if self.is_submitting() {
            return Err(GateError::AlreadySubmitting);
        }
        self.phase = ModalPhase::Shown;
        self.mode = mode;
        self.reason.clear();
        Ok(())
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        self.phase == ModalPhase::Shown
            && (self.mode == ModalMode::Approve || !self.reason.trim().is_empty())
    }

    /// Move to `Submitting` and return what should be sent.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::AlreadySubmitting`] if a request is in flight, or
    /// [`GateError::ConfirmDisabled`] if the modal is not shown or a reject
    /// reason is missing.
    pub fn begin_submit(&mut self) -> Result<Submission, GateError> {
        if self.is_submitting() {
            return Err(GateError::AlreadySubmitting);
        }
        if self.phase != ModalPhase::Shown {
            return Err(GateError::ConfirmDisabled("the confirmation dialog is not open"));
        }
        if !self.confirm_enabled() {
            return Err(GateError::ConfirmDisabled("a rejection reason is required"));
        }
        self.phase = ModalPhase::Submitting;
        Ok(match self.mode {
            ModalMode::Approve => Submission::Approve,
            ModalMode::Reject => Submission::Reject {
                reason: self.reason.trim().to_string(),
            },
        })
    }

    pub const fn finish_success(&mut self) {
        self.phase = ModalPhase::Success;
    }

    /// Back to `Shown` so the reviewer can retry or cancel.
    pub const fn finish_failure(&mut self) {
        self.phase = ModalPhase::Shown;
    }

    /// Close from `Shown`. Returns whether the modal closed.
    pub fn cancel(&mut self) -> bool {
        if self.phase != ModalPhase::Shown {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        self.reason.clear();
        true
    }

    /// Treat a click on `target_id` as cancel when it is the backdrop container.
    pub fn dismiss_outside(&mut self, target_id: &str) -> bool {
        target_id == self.close_container_id && self.cancel()
    }

    pub fn hide(&mut self) {
        self.phase = ModalPhase::Hidden;
        self.reason.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn modal() -> ConfirmationModal {
        ConfirmationModal::new("modal-container")
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("bad docs", true)]
    fn reject_confirm_needs_reason(#[case] reason: &str, #[case] enabled: bool) {
        let mut modal = modal();
        modal.show(ModalMode::Reject).unwrap();
        modal.set_reason(reason);
        assert_eq!(modal.confirm_enabled(), enabled);
    }

    #[test]
    fn approve_confirm_needs_no_reason() {
        let mut modal = modal();
        assert!(!modal.confirm_enabled());
        modal.show(ModalMode::Approve).unwrap();
        assert!(modal.confirm_enabled());
    }

    #[test]
    fn second_submit_is_refused() {
        let mut modal = modal();
        modal.show(ModalMode::Approve).unwrap();
        assert_eq!(modal.begin_submit().unwrap(), Submission::Approve);
        assert!(!modal.confirm_enabled());
        assert!(matches!(modal.begin_submit(), Err(GateError::AlreadySubmitting)));
        assert!(matches!(modal.show(ModalMode::Reject), Err(GateError::AlreadySubmitting)));
        assert!(!modal.cancel());
    }

    #[test]
    fn reject_submission_carries_trimmed_reason() {
        let mut modal = modal();
        modal.show(ModalMode::Reject).unwrap();
        modal.set_reason("  bad docs ");
        assert_eq!(
            modal.begin_submit().unwrap(),
            Submission::Reject {
                reason: "bad docs".into()
            }
        );
    }

    #[test]
    fn failure_returns_to_shown() {
        let mut modal = modal();
        modal.show(ModalMode::Approve).unwrap();
        modal.begin_submit().unwrap();
        modal.finish_failure();
        assert_eq!(modal.phase(), ModalPhase::Shown);
        assert!(modal.confirm_enabled());
    }

    #[test]
    fn outside_click_only_on_container() {
        let mut modal = modal();
        modal.show(ModalMode::Reject).unwrap();
        assert!(!modal.dismiss_outside("reason-input"));
        assert!(modal.is_visible());
        assert!(modal.dismiss_outside("modal-container"));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
    }

    #[test]
    fn showing_again_clears_reason() {
        let mut modal = modal();
        modal.show(ModalMode::Reject).unwrap();
        modal.set_reason("bad docs");
        modal.cancel();
        modal.show(ModalMode::Reject).unwrap();
        assert_eq!(modal.reason(), "");
    }
}
