//! Gate error types.
//!
//! Everything except [`GateError::Remote`] is a local validation error: it is
//! raised before any request is made and leaves the gate unchanged.

use prolio_core::enums::{EntityKind, EntityStatus};
use prolio_core::errors::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    /// A step index outside the checklist.
    #[error("step {index} is out of range (checklist has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// A step was marked verified while not expanded.
    #[error("step {index} must be open before it can be verified")]
    StepNotOpen { index: usize },

    /// Confirm was pressed while the confirm control is disabled.
    #[error("confirmation is not available: {0}")]
    ConfirmDisabled(&'static str),

    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The entity's current status does not allow the requested transition.
    #[error("{kind} {id} cannot move from {from} to {to}")]
    TransitionNotAllowed {
        kind: EntityKind,
        id: String,
        from: EntityStatus,
        to: EntityStatus,
    },

    /// The profile name is not one of the built-in profiles.
    #[error("unknown review profile: {0}")]
    UnknownProfile(String),

    /// Loading the entity for review failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
