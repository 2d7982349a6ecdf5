// Shared helpers for driving a running world from integration tests.
use platform_server::domain::tuning::platform::PlatformTuning;
use platform_server::domain::tuning::player::PlayerTuning;
use platform_server::use_cases::{WorldSettings, WorldUpdate};
use std::time::Duration;
use std::sync::Arc;
use tokio::sync::broadcast;

// Fast ticks keep the tests short while still going through the real interval.
pub fn fast_settings(tick_limit: Option<u64>) -> WorldSettings {
    WorldSettings {
        tick_interval: Duration::from_millis(5),
        seed: 1234,
        tick_limit,
        platform_tuning: PlatformTuning {
            spawn_every_ticks: 3,
        },
        player_tuning: PlayerTuning::default(),
    }
}

// Wait for the first update matching `pred`, failing after a generous timeout.
pub async fn wait_for_update(
    rx: &mut broadcast::Receiver<WorldUpdate>,
    pred: impl Fn(&WorldUpdate) -> bool,
) -> WorldUpdate {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Ok(update) if pred(&update) => break update,
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => panic!("world updates closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for world update")
}

// Wait for the first serialized message matching `pred`, parsed as JSON.
pub async fn wait_for_text(
    rx: &mut broadcast::Receiver<Arc<str>>,
    pred: impl Fn(&serde_json::Value) -> bool,
) -> serde_json::Value {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Ok(text) => {
                    let value: serde_json::Value =
                        serde_json::from_str(&text).expect("serialized message should be json");
                    if pred(&value) {
                        break value;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => panic!("text channel closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for serialized message")
}
