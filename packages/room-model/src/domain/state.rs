use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user/seat identifier as delivered by the sync layer.
///
/// The empty string is reserved for placeholder views and never assigned by
/// the server, though no resolver relies on that.
pub type UserId = String;

/// A user account within the room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl UserAccount {
    /// Account standing in for a seat whose user is missing from the room
    /// list. Carries the seat's id and blank display fields.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            username: String::new(),
            display_name: String::new(),
            avatar_url: String::new(),
        }
    }
}

/// Per-seat record inside an active game.
///
/// Game-specific fields travel in `data` uninterpreted: this core never reads
/// them, it only carries them through to the rendering layer. A default
/// record (factory-built, lobby phase) has an empty `data` map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayerRecord {
    pub id: UserId,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl GamePlayerRecord {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            data: Map::new(),
        }
    }
}

/// The active game: turn counter, whose turn it is, and the seat-ordered
/// player records. Absent from the room entirely while in the lobby.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub turn: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player_id: Option<UserId>,
    /// Seat order. Stable across turns; the basis for turn rotation.
    pub players: Vec<GamePlayerRecord>,
}

impl GameState {
    pub fn current_player_id(&self) -> Option<&str> {
        self.current_player_id.as_deref()
    }
}
