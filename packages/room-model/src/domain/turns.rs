//! Seat resolution and turn-relative rotation.
//!
//! Pure helpers over a projected player list. These live in `domain` so the
//! room aggregate and its tests share a single source of truth for "which
//! seat is mine" and "who is up after me".

use crate::domain::projection::PlayerView;
use crate::domain::state::UserId;

/// Resolve which view, if any, is the local client's seat.
///
/// - No controlled ids: no seat is ours.
/// - Exactly one controlled id: that seat is ours regardless of turn state.
/// - Several controlled ids (local multiplayer): only the seat whose turn is
///   active is unambiguously ours, so the active seat must be present among
///   the controlled ids; any other situation stays unresolved until the next
///   turn change.
pub fn resolve_this_player<'a>(
    players: &'a [PlayerView],
    client_users: &[UserId],
    current_player_id: Option<&str>,
) -> Option<&'a PlayerView> {
    match client_users {
        [] => None,
        [only] => players.iter().find(|player| player.id == *only),
        controlled => {
            let current = current_player_id?;
            if !controlled.iter().any(|id| id == current) {
                return None;
            }
            players.iter().find(|player| player.id == current)
        }
    }
}

/// Rotate the seat-ordered list around `this_id`, excluding it: seats after
/// it first, then seats before it, each partition in original order.
///
/// Produces the "next up after me" opponent display order. `this_id` should
/// come from a resolved seat; an id matching no seat leaves the order
/// untouched.
pub fn rotate_after(players: Vec<PlayerView>, this_id: &str) -> Vec<PlayerView> {
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut seen = false;

    for player in players {
        if player.id == this_id {
            seen = true;
        } else if seen {
            after.push(player);
        } else {
            before.push(player);
        }
    }

    after.extend(before);
    after
}
