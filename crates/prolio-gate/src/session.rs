//! A review of one entity from open to completion.

use std::sync::Arc;
use std::time::Duration;

use prolio_config::GateConfig;
use prolio_core::api::EntityApi;
use prolio_core::checklist::StepContent;
use prolio_core::entities::Entity;
use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_core::errors::RemoteError;
use prolio_core::responses::RemoteReply;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::action_bar::ActionBar;
use crate::controller::GateController;
use crate::error::GateError;
use crate::modal::{ConfirmationModal, ModalMode, ModalPhase, Submission};
use crate::notifier::{Notice, Notifier};
use crate::profile::GateProfile;
use crate::renderer::{DocumentTile, PreviewOverlay, StepView, render_steps};

/// Behavior knobs for a session, usually taken from [`GateConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSettings {
    /// How long the success notice stays up before the session completes.
    pub success_delay: Duration,
    pub fallback_error_message: String,
    pub incomplete_notice: String,
    pub close_container_id: String,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self::from(&GateConfig::default())
    }
}

impl From<&GateConfig> for GateSettings {
    fn from(config: &GateConfig) -> Self {
        Self {
            success_delay: config.success_delay(),
            fallback_error_message: config.fallback_error_message.clone(),
            incomplete_notice: config.incomplete_notice.clone(),
            close_container_id: config.close_container_id.clone(),
        }
    }
}

/// Result of a confirm that reached the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The transition went through; the caller should leave the gate and
    /// refresh its table.
    Completed(RemoteReply),
    /// The call failed; the modal is shown again for a retry or cancel.
    Failed(RemoteError),
}

/// Serializable snapshot of everything a reviewer sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateView {
    pub profile: String,
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    pub status: EntityStatus,
    pub steps: Vec<StepView>,
    pub completed: usize,
    pub total: usize,
    pub actions: ActionBar,
    /// Verb for the approve confirmation prompt.
    pub approve_verb: String,
    pub modal_phase: ModalPhase,
    pub modal_mode: ModalMode,
    pub preview: Option<DocumentTile>,
}

/// Puts the modal back to `Shown` if a confirm is dropped mid-request.
struct SubmitGuard<'a> {
    modal: &'a mut ConfirmationModal,
    settled: bool,
}

impl<'a> SubmitGuard<'a> {
    const fn new(modal: &'a mut ConfirmationModal) -> Self {
        Self {
            modal,
            settled: false,
        }
    }

    fn succeed(mut self) {
        self.modal.finish_success();
        self.settled = true;
    }

    fn fail(mut self) {
        self.modal.finish_failure();
        self.settled = true;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.modal.finish_failure();
        }
    }
}

pub struct GateSession {
    api: Arc<dyn EntityApi>,
    notifier: Arc<dyn Notifier>,
    profile: GateProfile,
    entity: Entity,
    controller: GateController,
    modal: ConfirmationModal,
    preview: PreviewOverlay,
    settings: GateSettings,
}

impl std::fmt::Debug for GateSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateSession")
            .field("profile", &self.profile.name)
            .field("entity", &self.entity.id)
            .field("controller", &self.controller)
            .field("modal", &self.modal)
            .finish_non_exhaustive()
    }
}

impl GateSession {
    /// Fetch the entity and build its checklist.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Remote`] if the entity cannot be fetched. An error
    /// notice is emitted as well.
    pub async fn open(
        api: Arc<dyn EntityApi>,
        notifier: Arc<dyn Notifier>,
        profile: GateProfile,
        id: &str,
        settings: GateSettings,
    ) -> Result<Self, GateError> {
        let entity = match api.fetch_entity(profile.kind, id).await {
            Ok(entity) => entity,
            Err(err) => {
                error!(kind = %profile.kind, id, error = %err, "failed to load entity for review");
                notifier.notify(Notice::error(
                    err.user_message(&settings.fallback_error_message),
                ));
                return Err(err.into());
            }
        };
        debug!(profile = %profile.name, id, status = %entity.status, "review opened");
        Ok(Self::with_entity(api, notifier, profile, entity, settings))
    }

    /// Start a review for an entity that is already loaded.
    #[must_use]
    pub fn with_entity(
        api: Arc<dyn EntityApi>,
        notifier: Arc<dyn Notifier>,
        profile: GateProfile,
        entity: Entity,
        settings: GateSettings,
    ) -> Self {
        let steps = profile.checklist.build(&entity);
        let modal = ConfirmationModal::new(settings.close_container_id.clone());
        Self {
            api,
            notifier,
            profile,
            entity,
            controller: GateController::new(steps),
            modal,
            preview: PreviewOverlay::default(),
            settings,
        }
    }

    #[must_use]
    pub const fn entity(&self) -> &Entity {
        &self.entity
    }

    #[must_use]
    pub const fn profile(&self) -> &GateProfile {
        &self.profile
    }

    #[must_use]
    pub const fn controller(&self) -> &GateController {
        &self.controller
    }

    #[must_use]
    pub const fn modal(&self) -> &ConfirmationModal {
        &self.modal
    }

    #[must_use]
    pub const fn preview(&self) -> &PreviewOverlay {
        &self.preview
    }

    #[must_use]
    pub fn action_bar(&self) -> ActionBar {
        ActionBar::derive(&self.profile, self.entity.status, &self.controller, &self.modal)
    }

    #[must_use]
    pub fn view(&self) -> GateView {
        GateView {
            profile: self.profile.name.clone(),
            kind: self.profile.kind,
            id: self.entity.id.clone(),
            name: self.entity.name.clone(),
            status: self.entity.status,
            steps: render_steps(&self.controller),
            completed: self.controller.completed().len(),
            total: self.controller.len(),
            actions: self.action_bar(),
            approve_verb: self.profile.approve_verb.clone(),
            modal_phase: self.modal.phase(),
            modal_mode: self.modal.mode(),
            preview: self.preview.current().cloned(),
        }
    }

    /// Toggle step `index`. Any open preview is closed.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::StepOutOfRange`] for an index past the checklist.
    pub fn open_step(&mut self, index: usize) -> Result<(), GateError> {
        self.controller.open_step(index)?;
        self.preview.close();
        Ok(())
    }

    /// Verify the expanded step. Returns its index, or `None` if nothing is open.
    pub fn verify_open_step(&mut self) -> Option<usize> {
        let index = self.controller.open_step_handle()?.verify_and_continue();
        self.preview.close();
        debug!(index, "step verified");
        Some(index)
    }

    /// Preview document `index` of the expanded step. Returns whether an
    /// image preview opened.
    pub fn preview_document(&mut self, index: usize) -> bool {
        let Some(open) = self.controller.open_index() else {
            return false;
        };
        let StepContent::Documents(documents) = &self.controller.steps()[open].content else {
            return false;
        };
        documents
            .get(index)
            .map(DocumentTile::from_document)
            .is_some_and(|tile| self.preview.open(&tile))
    }

    pub fn close_preview(&mut self) {
        self.preview.close();
    }

    fn transition_allowed(&self, target: EntityStatus) -> bool {
        if self.entity.status.can_transition_to(target) {
            return true;
        }
        let err = GateError::TransitionNotAllowed {
            kind: self.profile.kind,
            id: self.entity.id.clone(),
            from: self.entity.status,
            to: target,
        };
        warn!(error = %err, "transition refused locally");
        self.notifier.notify(Notice::warning(err.to_string()));
        false
    }

    /// Open the modal in approve mode. Shows a warning and returns `false`
    /// when steps are unverified or the status cannot move to the target.
    /// Returns `false` without a notice while a dialog is already open.
    pub fn request_approve(&mut self) -> bool {
        if self.modal.is_visible() {
            return false;
        }
        if !self.controller.is_approvable() {
            self.notifier
                .notify(Notice::warning(self.settings.incomplete_notice.clone()));
            return false;
        }
        if !self.transition_allowed(self.profile.approve_target) {
            return false;
        }
        self.modal.show(ModalMode::Approve).is_ok()
    }

    /// Open the modal in reject mode. Step progress is not required.
    pub fn request_reject(&mut self) -> bool {
        if self.modal.is_visible() {
            return false;
        }
        if !self.transition_allowed(EntityStatus::Rejected) {
            return false;
        }
        self.modal.show(ModalMode::Reject).is_ok()
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.modal.set_reason(reason);
    }

    /// Close the modal. Verified steps stay verified.
    pub fn cancel(&mut self) -> bool {
        self.modal.cancel()
    }

    pub fn dismiss_outside(&mut self, target_id: &str) -> bool {
        self.modal.dismiss_outside(target_id)
    }

    /// Send the approve or reject request.
    ///
    /// On success the server message is shown, the session waits for the
    /// configured delay and the modal closes. On failure the server message
    /// (or the fallback) is shown and the modal returns to `Shown`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::AlreadySubmitting`] or [`GateError::ConfirmDisabled`]
    /// without contacting the API. Remote failures are not errors here; they
    /// come back as [`ConfirmOutcome::Failed`].
    pub async fn confirm(&mut self) -> Result<ConfirmOutcome, GateError> {
        let submission = self.modal.begin_submit()?;
        let guard = SubmitGuard::new(&mut self.modal);
        let kind = self.profile.kind;
        let id = self.entity.id.clone();

        let (target, result) = match &submission {
            Submission::Approve => {
                let target = self.profile.approve_target;
                (target, self.api.transition_status(kind, &id, target).await)
            }
            Submission::Reject { reason } => (
                EntityStatus::Rejected,
                self.api.reject_entity(kind, &id, reason).await,
            ),
        };

        match result {
            Ok(reply) => {
                guard.succeed();
                self.entity.status = target;
                info!(%kind, id = %id, status = %target, message = %reply.message, "transition completed");
                let message = if reply.message.trim().is_empty() {
                    format!("{} is now {target}", self.entity.name)
                } else {
                    reply.message.clone()
                };
                self.notifier.notify(Notice::success(message));
                tokio::time::sleep(self.settings.success_delay).await;
                self.modal.hide();
                Ok(ConfirmOutcome::Completed(reply))
            }
            Err(err) => {
                guard.fail();
                error!(%kind, id = %id, error = %err, "transition failed");
                self.notifier.notify(Notice::error(
                    err.user_message(&self.settings.fallback_error_message),
                ));
                Ok(ConfirmOutcome::Failed(err))
            }
        }
    }
}
