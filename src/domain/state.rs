// Domain-level simulation entities and input types.

use crate::domain::PlayerSnapshot;

/// Movement requested by a player, applied on the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerMove {
    pub dx: i32,
    pub dy: i32,
}

pub struct SimPlayer {
    pub id: u64,
    // Snapshot published for the last completed tick.
    pub snapshot: PlayerSnapshot,
    // Tick counter value when the player joined; drives `age`.
    pub joined_tick: u64,

    // Movement-only state (do not serialize to clients)
    pub pending_move: PlayerMove,
}

impl SimPlayer {
    pub fn new(id: u64, snapshot: PlayerSnapshot, joined_tick: u64) -> Self {
        Self {
            id,
            snapshot,
            joined_tick,
            pending_move: PlayerMove::default(),
        }
    }
}
