//! Merged, render-ready player views.
//!
//! A [`PlayerView`] combines a user account with its per-seat game record.
//! The projection has two distinct branches: with an active game, views
//! follow the game's seat order and carry whatever game fields the server
//! sent; in the lobby, views follow the user list and carry a default record
//! with an empty game payload. Callers must not assume game fields pre-game.

use crate::domain::factory::PlayerFactory;
use crate::domain::state::{GamePlayerRecord, GameState, UserAccount, UserId};

/// One player as the rendering layer sees them: display fields from the user
/// account, game payload from the seat record.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    /// The seat record. Empty game payload in lobby phase.
    pub record: GamePlayerRecord,
}

impl PlayerView {
    /// Merge an account and a seat record into one view.
    ///
    /// The two ids are equal on every projection path: the active-game branch
    /// looks the account up by the record's id (or synthesizes a placeholder
    /// account carrying it), and the lobby branch builds the record from the
    /// account's id.
    pub fn new(user: UserAccount, record: GamePlayerRecord) -> Self {
        Self {
            id: record.id.clone(),
            username: user.username,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            record,
        }
    }
}

/// Project one view per seat (active game) or per user account (lobby).
///
/// Active game: seat order is preserved; a seat whose user is missing from
/// `users` gets a placeholder account with the seat's id and blank display
/// fields. Lobby: one view per account, with a factory-built default record.
pub fn project_players(
    game: Option<&GameState>,
    users: &[UserAccount],
    factory: &dyn PlayerFactory,
) -> Vec<PlayerView> {
    match game {
        Some(game) => game
            .players
            .iter()
            .map(|record| {
                let user = users
                    .iter()
                    .find(|user| user.id == record.id)
                    .cloned()
                    .unwrap_or_else(|| UserAccount::placeholder(&record.id));
                PlayerView::new(user, record.clone())
            })
            .collect(),
        None => users
            .iter()
            .map(|user| {
                let record = factory.create_player(&user.id);
                PlayerView::new(user.clone(), record)
            })
            .collect(),
    }
}

/// Blank view (empty id and display fields) for callers that need a
/// non-missing value to render.
pub fn placeholder_view(factory: &dyn PlayerFactory) -> PlayerView {
    let user = UserAccount::placeholder("");
    let record = factory.create_player(&user.id);
    PlayerView::new(user, record)
}
