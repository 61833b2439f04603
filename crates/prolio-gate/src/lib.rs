//! # prolio-gate
//!
//! The sequential verification gate used by every Prolio review flow.
//!
//! A reviewer walks a checklist one step at a time. Approve unlocks only once
//! every step is verified; reject is always available but needs a reason.
//! The gate is generic over [`prolio_core::api::EntityApi`] and reports to an
//! injected [`Notifier`], so the same code serves companies, influencers,
//! products and banners.
//!
//! - [`GateController`]: open step and completed set
//! - [`ConfirmationModal`]: confirm state machine with a submitting guard
//! - [`GateSession`]: one entity's review, wired to the API
//! - [`EntityTable`]: the list view refreshed after a review completes

pub mod action_bar;
pub mod controller;
pub mod error;
pub mod mocks;
pub mod modal;
pub mod notifier;
pub mod profile;
pub mod renderer;
pub mod session;
pub mod table;

pub use action_bar::ActionBar;
pub use controller::{GateController, OpenStep};
pub use error::GateError;
pub use modal::{ConfirmationModal, ModalMode, ModalPhase, Submission};
pub use notifier::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use profile::GateProfile;
pub use renderer::{DocumentTile, PreviewOverlay, StepBody, StepView, render_steps};
pub use session::{ConfirmOutcome, GateSession, GateSettings, GateView};
pub use table::EntityTable;
