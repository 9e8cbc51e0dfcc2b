//! Domain layer: room state, player projection, and turn derivation.

pub mod factory;
pub mod notify;
pub mod projection;
pub mod room;
pub mod state;
pub mod turns;
pub mod validate;

#[cfg(test)]
mod tests_store;
#[cfg(test)]
mod tests_validate;

// Re-exports for ergonomics
pub use factory::{DefaultPlayerFactory, PlayerFactory};
pub use notify::{NotificationSink, NullSink, RoomChange};
pub use projection::PlayerView;
pub use room::{Room, RoomUpdate};
pub use state::{GamePlayerRecord, GameState, UserAccount, UserId};
