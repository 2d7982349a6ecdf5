// Wire protocol DTOs and conversions for public game server messages.

use crate::domain::{Platform, PlayerSnapshot};
use crate::use_cases::{ServerState, WorldUpdate};
use serde::Serialize;

/// Messages the server publishes to connected clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
    // High-level server state transitions.
    GameState(ServerStateDto),
}

/// Snapshot of the world sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub server_age: u32,
    pub players: Vec<PlayerStateDto>,
    pub platforms: Vec<PlatformDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            server_age: update.server_age,
            players: update.players.into_iter().map(PlayerStateDto::from).collect(),
            platforms: update.platforms.iter().map(PlatformDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub color: String,
    pub x: i32,
    pub y: i32,
    pub age: u32,
}

impl From<PlayerSnapshot> for PlayerStateDto {
    fn from(player: PlayerSnapshot) -> Self {
        Self {
            color: player.color,
            x: player.x,
            y: player.y,
            age: player.age,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformDto {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl From<&Platform> for PlatformDto {
    fn from(platform: &Platform) -> Self {
        Self {
            x: platform.x,
            y: platform.y,
            width: platform.width,
        }
    }
}

/// Server lifecycle state sent to clients for UI flow.
#[derive(Debug, Clone, Serialize)]
pub enum ServerStateDto {
    Waiting,
    Running,
    Ended,
}

impl From<ServerState> for ServerStateDto {
    fn from(state: ServerState) -> Self {
        match state {
            ServerState::Waiting => ServerStateDto::Waiting,
            ServerState::Running => ServerStateDto::Running,
            ServerState::Ended => ServerStateDto::Ended,
        }
    }
}
