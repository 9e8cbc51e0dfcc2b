//! Change notification seam to the external reactive layer.

/// Which stored field a completed mutation touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomChange {
    Game,
    Users,
    ClientUsers,
    /// Full-snapshot replace via [`crate::domain::room::Room::apply`].
    Replaced,
}

/// Receives one notification after each completed room mutation.
///
/// The surrounding application uses this to schedule a re-render; this core
/// holds no reactive machinery of its own. Implementations must not re-enter
/// the room (access per room instance is serialized).
pub trait NotificationSink {
    fn room_changed(&self, change: RoomChange);
}

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn room_changed(&self, _change: RoomChange) {}
}
