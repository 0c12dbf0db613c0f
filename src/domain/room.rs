//! Room records and the housekeeping status cycle

use serde::{Deserialize, Serialize};

use crate::impl_record;

/// The housekeeping state of a room.
///
/// Housekeeping advances a room with a single tap, so the states form a
/// fixed cycle: `Dirty → Cleaning → Ready → Dirty`. There is no other
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Dirty,
    Cleaning,
    Ready,
}

impl RoomStatus {
    /// The next state in the tap-to-advance cycle
    pub fn advance(self) -> RoomStatus {
        match self {
            RoomStatus::Dirty => RoomStatus::Cleaning,
            RoomStatus::Cleaning => RoomStatus::Ready,
            RoomStatus::Ready => RoomStatus::Dirty,
        }
    }

    /// The wire/status-field form of this state
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Dirty => "dirty",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Ready => "ready",
        }
    }

    /// Parse a status string; unknown values normalize to `Dirty` so a bad
    /// status never blocks housekeeping from working the room.
    pub fn parse(s: &str) -> RoomStatus {
        match s {
            "cleaning" => RoomStatus::Cleaning,
            "ready" => RoomStatus::Ready,
            _ => RoomStatus::Dirty,
        }
    }
}

impl_record!(
    Room,
    "room", "rooms",
    searchable: ["name"],
    tenant: hotel_id,
    {
        hotel_id: ::uuid::Uuid,
        floor: i64,
    }
);

impl Room {
    /// The room's current housekeeping state
    pub fn room_status(&self) -> RoomStatus {
        RoomStatus::parse(&self.status)
    }

    /// Tap-to-advance: move the room to the next housekeeping state
    pub fn advance_status(&mut self) {
        let next = self.room_status().advance();
        self.set_status(next.as_str().to_string());
    }
}
