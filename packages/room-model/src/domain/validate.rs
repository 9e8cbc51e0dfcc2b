//! Diagnostic checks for the upstream state guarantees.
//!
//! The sync layer is supposed to deliver unique ids and a current player that
//! references a real seat. Every resolver degrades gracefully when it does
//! not; these checks let that layer find out it is feeding bad state instead
//! of silently rendering "no match" views.

use std::collections::HashSet;

use crate::domain::state::{GameState, UserAccount};
use crate::errors::domain::{DomainError, ValidationKind};

/// Report the first violated upstream guarantee, if any.
///
/// Checks, in order: duplicate seat ids within the active game, duplicate
/// user ids within the room, and a `current_player_id` naming no seat. A
/// lobby-phase room only gets the user check.
pub fn validate_room(game: Option<&GameState>, users: &[UserAccount]) -> Result<(), DomainError> {
    if let Some(game) = game {
        let mut seat_ids = HashSet::new();
        for record in &game.players {
            if !seat_ids.insert(record.id.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateSeat,
                    format!("seat id {:?} repeated in game players", record.id),
                ));
            }
        }
    }

    let mut user_ids = HashSet::new();
    for user in users {
        if !user_ids.insert(user.id.as_str()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateUser,
                format!("user id {:?} repeated in room users", user.id),
            ));
        }
    }

    if let Some(game) = game {
        if let Some(current) = game.current_player_id() {
            if !game.players.iter().any(|record| record.id == current) {
                return Err(DomainError::validation(
                    ValidationKind::UnknownCurrentPlayer,
                    format!("current player id {current:?} matches no seat"),
                ));
            }
        }
    }

    Ok(())
}
