use crate::interface_adapters::protocol::{ServerMessage, WorldUpdateDto};
use crate::use_cases::{ServerState, WorldUpdate};

use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, warn};

/// Serialized message shared by every subscriber without copying.
pub type SharedText = Arc<str>;

pub fn serialize_update(update: WorldUpdate) -> Result<SharedText, serde_json::Error> {
    let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(update));
    serde_json::to_string(&msg).map(SharedText::from)
}

pub fn serialize_state(state: ServerState) -> Result<SharedText, serde_json::Error> {
    let msg = ServerMessage::GameState(state.into());
    serde_json::to_string(&msg).map(SharedText::from)
}

pub async fn world_update_serializer(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    world_text_tx: broadcast::Sender<SharedText>,
    world_latest_tx: watch::Sender<SharedText>,
) {
    // Serialize each world update once and broadcast the shared text.
    loop {
        match world_rx.recv().await {
            Ok(update) => {
                let tick = update.tick;
                let text = match serialize_update(update) {
                    Ok(text) => text,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize world update");
                        continue;
                    }
                };

                debug!(tick, bytes = text.len(), "world update serialized");

                // Store the latest text for lag recovery.
                world_latest_tx.send_replace(text.clone());
                let _ = world_text_tx.send(text);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(
                    missed = n,
                    "world serializer lagged; skipping to latest update"
                );
            }
            Err(broadcast::error::RecvError::Closed) => {
                warn!("world updates channel closed; serializer exiting");
                break;
            }
        }
    }
}

pub async fn server_state_serializer(
    mut server_state_rx: watch::Receiver<ServerState>,
    world_text_tx: broadcast::Sender<SharedText>,
) {
    // Publish the current state first, then every transition on the same text stream.
    loop {
        let state = server_state_rx.borrow_and_update().clone();
        match serialize_state(state) {
            Ok(text) => {
                debug!(bytes = text.len(), "server state serialized");
                let _ = world_text_tx.send(text);
            }
            Err(e) => error!(error = ?e, "failed to serialize server state"),
        }

        if server_state_rx.changed().await.is_err() {
            warn!("server state channel closed; serializer exiting");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_serializer_publishes_current_state_then_transitions() {
        let (state_tx, state_rx) = watch::channel(ServerState::Waiting);
        let (text_tx, mut text_rx) = broadcast::channel::<SharedText>(8);
        let task = tokio::spawn(server_state_serializer(state_rx, text_tx));

        let first = text_rx.recv().await.unwrap();
        assert_eq!(&*first, r#"{"type":"GameState","data":"Waiting"}"#);

        state_tx.send_replace(ServerState::Ended);
        let next = text_rx.recv().await.unwrap();
        assert_eq!(&*next, r#"{"type":"GameState","data":"Ended"}"#);

        // Dropping the sender ends the task.
        drop(state_tx);
        task.await.unwrap();
    }

    #[test]
    fn update_serializes_as_world_update() {
        let text = serialize_update(WorldUpdate {
            tick: 1,
            server_age: 0,
            players: Vec::new(),
            platforms: Vec::new(),
        })
        .unwrap();
        assert!(text.starts_with(r#"{"type":"WorldUpdate""#));
    }
}
