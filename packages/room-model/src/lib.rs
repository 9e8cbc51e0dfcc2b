#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Player-centric view of a multiplayer turn-based game room.
//!
//! This crate derives everything a renderer needs per frame (whose turn it
//! is, which seat belongs to the local client, and the turn-relative opponent
//! order) from three stored inputs: an optional active game, the room's user
//! accounts, and the set of user ids this client controls. All derived values
//! are recomputed from current stored state on every call; the surrounding
//! application layer feeds mutations in and re-renders when notified.

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::factory::{DefaultPlayerFactory, PlayerFactory};
pub use domain::notify::{NotificationSink, NullSink, RoomChange};
pub use domain::projection::PlayerView;
pub use domain::room::{Room, RoomUpdate};
pub use domain::state::{GamePlayerRecord, GameState, UserAccount, UserId};
pub use errors::domain::{DomainError, ValidationKind};
