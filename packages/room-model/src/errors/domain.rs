//! Domain-level error type for the diagnostic surface.
//!
//! The derivation getters never return errors; they degrade to absence
//! values by contract. This type exists for [`crate::domain::validate`],
//! which lets the state-synchronization layer check the upstream guarantees
//! (unique ids, resolvable current player) it is supposed to provide.

use thiserror::Error;

/// Upstream guarantees the stored room state can violate (minimal set;
/// extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Two user accounts share an id.
    DuplicateUser,
    /// Two seat records share an id within the active game.
    DuplicateSeat,
    /// `current_player_id` names no seat in the active game.
    UnknownCurrentPlayer,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Upstream guarantee violated in the stored room state
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
}
