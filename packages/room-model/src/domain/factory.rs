//! Player record construction seam.

use crate::domain::state::GamePlayerRecord;

/// Builds default per-seat records.
///
/// Used for the lobby-phase projection (one default record per user account)
/// and for placeholder view construction. Implementations belong to the
/// surrounding application, which knows what a fresh seat record looks like
/// for its game; this core only requires that the returned record carry the
/// requested id.
pub trait PlayerFactory {
    /// Create a default record carrying only `id`; game fields unset.
    fn create_player(&self, id: &str) -> GamePlayerRecord;
}

/// Factory producing bare records with an empty game payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPlayerFactory;

impl PlayerFactory for DefaultPlayerFactory {
    fn create_player(&self, id: &str) -> GamePlayerRecord {
        GamePlayerRecord::new(id)
    }
}
