// Use-case level inputs/outputs for the game loop.

use crate::domain::{Platform, PlayerSnapshot};

#[derive(Debug, Clone)]
pub enum GameEvent {
    Join { player_id: u64 },
    Leave { player_id: u64 },
    Move { player_id: u64, dx: i32, dy: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerState {
    Waiting,
    Running,
    Ended,
}

/// Everything clients need to render one tick.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    /// Whole seconds of simulated time since the world started.
    pub server_age: u32,
    pub players: Vec<PlayerSnapshot>,
    pub platforms: Vec<Platform>,
}
