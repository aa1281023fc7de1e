//! Periods and rooms.
//!
//! Period and Room form a many-to-many availability relation: a room is
//! usable in a period iff each lists the other.

use std::collections::BTreeSet;
use std::fmt;

use super::ids::{PeriodId, RoomId};

/// A named time block.
#[derive(Debug, Clone)]
pub struct Period {
    pub(super) id: PeriodId,
    pub(super) name: String,
    pub(super) rooms: BTreeSet<RoomId>,
}

impl Period {
    pub fn id(&self) -> PeriodId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rooms usable during this period.
    pub fn rooms(&self) -> &BTreeSet<RoomId> {
        &self.rooms
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PER {}", self.name)
    }
}

/// A named room.
#[derive(Debug, Clone)]
pub struct Room {
    pub(super) id: RoomId,
    pub(super) name: String,
    pub(super) periods: BTreeSet<PeriodId>,
}

impl Room {
    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Periods this room is usable in.
    pub fn periods(&self) -> &BTreeSet<PeriodId> {
        &self.periods
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RM {}", self.name)
    }
}
