//! Room aggregate: stored fields plus the derivation getters.
//!
//! The room stores exactly three fields (the optional active game, the user
//! accounts, and the ids this client controls) and recomputes every derived
//! value from them on each call. Mutations replace whole fields, bump the
//! version counter, and notify the injected sink; nothing here caches, so a
//! reader can never observe a result mixing old and new snapshots.

use tracing::{debug, trace};

use crate::domain::factory::PlayerFactory;
use crate::domain::notify::{NotificationSink, RoomChange};
use crate::domain::projection::{placeholder_view, project_players, PlayerView};
use crate::domain::state::{GameState, UserAccount, UserId};
use crate::domain::{turns, validate};
use crate::errors::domain::DomainError;

/// Atomic replacement for all three stored fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomUpdate {
    pub game: Option<GameState>,
    pub users: Vec<UserAccount>,
    pub client_users: Vec<UserId>,
}

/// A game room as seen by one client.
///
/// Two phases: lobby (`game` absent) and active (`game` present). The
/// transition happens when the sync layer assigns a game; this core never
/// transitions back. Access per instance is serialized by the caller: the
/// getters are synchronous pull-based recomputations and the setters are the
/// only mutation surface.
pub struct Room {
    factory: Box<dyn PlayerFactory>,
    sink: Box<dyn NotificationSink>,
    game: Option<GameState>,
    users: Vec<UserAccount>,
    client_users: Vec<UserId>,
    version: u64,
}

impl Room {
    pub fn new(factory: Box<dyn PlayerFactory>, sink: Box<dyn NotificationSink>) -> Self {
        Self {
            factory,
            sink,
            game: None,
            users: Vec::new(),
            client_users: Vec::new(),
            version: 0,
        }
    }

    // Stored-field access.

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn client_users(&self) -> &[UserId] {
        &self.client_users
    }

    /// Bumped on every stored-field write. Staleness signal for the external
    /// reactive layer; derived getters do not read it.
    pub fn version(&self) -> u64 {
        self.version
    }

    // Stored-field mutation. Each write is a whole-field replacement.

    pub fn set_game(&mut self, game: Option<GameState>) {
        if self.game.is_none() && game.is_some() {
            debug!("room entering active phase");
        }
        self.game = game;
        self.bump(RoomChange::Game);
    }

    pub fn set_users(&mut self, users: Vec<UserAccount>) {
        self.users = users;
        self.bump(RoomChange::Users);
    }

    pub fn set_client_users(&mut self, client_users: Vec<UserId>) {
        self.client_users = client_users;
        self.bump(RoomChange::ClientUsers);
    }

    /// Replace all three stored fields in one step: a single version bump and
    /// a single notification, so cross-referencing getters only ever see the
    /// new snapshot as a whole.
    pub fn apply(&mut self, update: RoomUpdate) {
        if self.game.is_none() && update.game.is_some() {
            debug!("room entering active phase");
        }
        self.game = update.game;
        self.users = update.users;
        self.client_users = update.client_users;
        self.bump(RoomChange::Replaced);
    }

    fn bump(&mut self, change: RoomChange) {
        self.version = self.version.wrapping_add(1);
        trace!(version = self.version, ?change, "room state replaced");
        self.sink.room_changed(change);
    }

    // Derived values. Everything below recomputes from the stored fields.

    /// Current turn number; 0 in the lobby.
    pub fn turn(&self) -> u32 {
        self.game.as_ref().map_or(0, |game| game.turn)
    }

    /// Whether the active seat is this client's resolved seat. False whenever
    /// either side is absent: no game, no current player, or no resolvable
    /// this-player.
    pub fn is_my_turn(&self) -> bool {
        match (self.current_player_id(), self.this_player()) {
            (Some(current), Some(me)) => me.id == current,
            _ => false,
        }
    }

    /// One view per seat (active game, seat order) or per user account
    /// (lobby). See [`project_players`] for the two branches.
    pub fn players(&self) -> Vec<PlayerView> {
        project_players(self.game.as_ref(), &self.users, self.factory.as_ref())
    }

    /// The view whose seat currently holds the turn, if any.
    pub fn current_player(&self) -> Option<PlayerView> {
        let current = self.current_player_id()?;
        self.players().into_iter().find(|player| player.id == current)
    }

    /// This client's resolved seat. See [`turns::resolve_this_player`] for
    /// the disambiguation rules when the client controls several seats.
    pub fn this_player(&self) -> Option<PlayerView> {
        let players = self.players();
        turns::resolve_this_player(&players, &self.client_users, self.current_player_id()).cloned()
    }

    /// Like [`Self::this_player`] but always yields a view: a blank
    /// placeholder (empty id and display fields) when unresolved.
    pub fn this_player_or_empty(&self) -> PlayerView {
        self.this_player()
            .unwrap_or_else(|| placeholder_view(self.factory.as_ref()))
    }

    /// Every view except the resolved this-player. With no resolved
    /// this-player the full list comes back unchanged: exclusion is an
    /// explicit id-equality filter guarded by resolution, never a comparison
    /// against a missing id.
    pub fn other_players(&self) -> Vec<PlayerView> {
        let players = self.players();
        match self.resolved_id(&players) {
            Some(this_id) => players
                .iter()
                .filter(|player| player.id != this_id)
                .cloned()
                .collect(),
            None => players,
        }
    }

    /// Opponents in turn-relative display order: seats after this-player's
    /// seat first, then seats before it, wrapping. Unrotated when no
    /// this-player resolves.
    pub fn other_players_ordered(&self) -> Vec<PlayerView> {
        let players = self.players();
        match self.resolved_id(&players) {
            Some(this_id) => turns::rotate_after(players, &this_id),
            None => players,
        }
    }

    /// Check the upstream guarantees the resolvers degrade around: unique
    /// seat ids, unique user ids, resolvable current player. Diagnostic for
    /// the sync layer; no getter depends on it passing.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate::validate_room(self.game.as_ref(), &self.users)
    }

    fn current_player_id(&self) -> Option<&str> {
        self.game.as_ref().and_then(GameState::current_player_id)
    }

    fn resolved_id(&self, players: &[PlayerView]) -> Option<UserId> {
        turns::resolve_this_player(players, &self.client_users, self.current_player_id())
            .map(|player| player.id.clone())
    }
}

impl Default for Room {
    fn default() -> Self {
        use crate::domain::factory::DefaultPlayerFactory;
        use crate::domain::notify::NullSink;

        Self::new(Box::new(DefaultPlayerFactory), Box::new(NullSink))
    }
}

impl std::fmt::Debug for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("game", &self.game)
            .field("users", &self.users)
            .field("client_users", &self.client_users)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
