// Use cases layer: application workflows for the game server.

pub mod game;
pub mod types;

pub use game::{World, WorldError, WorldSettings, world_task};
pub use types::{GameEvent, ServerState, WorldUpdate};
