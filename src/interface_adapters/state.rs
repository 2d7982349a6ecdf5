use crate::interface_adapters::serializer::SharedText;
use crate::use_cases::{GameEvent, ServerState, WorldUpdate};
use std::sync::Arc;
use tokio::sync::{Notify, broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Inputs flowing from producers into the game loop.
    pub input_tx: mpsc::Sender<GameEvent>,
    // World updates produced by the game loop (domain structs).
    pub world_tx: broadcast::Sender<WorldUpdate>,
    // Serialized world updates, shared across all consumers.
    pub world_text_tx: broadcast::Sender<SharedText>,
    // Latest serialized world update for lag recovery.
    pub world_latest_tx: watch::Sender<SharedText>,
    // High-level server state.
    pub server_state_tx: watch::Sender<ServerState>,
    // Stops the world task.
    pub shutdown: Arc<Notify>,
}
