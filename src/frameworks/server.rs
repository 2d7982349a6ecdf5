// Framework bootstrap for the game server runtime.

use crate::domain::tuning::platform::PlatformTuning;
use crate::domain::tuning::player::PlayerTuning;
use crate::frameworks::config;
use crate::interface_adapters::serializer::{
    SharedText, server_state_serializer, world_update_serializer,
};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::utils::rng::entropy_seed;
use crate::use_cases::{GameEvent, ServerState, WorldSettings, WorldUpdate, world_task};

use std::{io::Result, sync::Arc};
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Builds world settings from the environment.
pub fn settings_from_env() -> WorldSettings {
    let mut platform_tuning = PlatformTuning::default();
    if let Some(every) = config::platform_spawn_every_ticks() {
        platform_tuning.spawn_every_ticks = every;
    }

    WorldSettings {
        tick_interval: config::tick_interval(),
        seed: config::world_seed().unwrap_or_else(entropy_seed),
        tick_limit: config::match_tick_limit(),
        platform_tuning,
        player_tuning: PlayerTuning::default(),
    }
}

/// Wires the channels and spawns the world and serializer tasks.
pub fn start(settings: WorldSettings) -> (Arc<AppState>, JoinHandle<()>) {
    // input_tx/rx: All player events go to the single world task.
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);
    // world_tx/rx: World updates are broadcast to all consumers.
    let (world_tx, _world_rx) = broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);
    // world_text_tx/rx: Serialized world updates shared across all consumers.
    let (world_text_tx, _world_text_rx) =
        broadcast::channel::<SharedText>(config::WORLD_BROADCAST_CAPACITY);
    let (world_latest_tx, _world_latest_rx) = watch::channel::<SharedText>(SharedText::from(""));
    let (server_state_tx, _server_state_rx) = watch::channel::<ServerState>(ServerState::Waiting);
    let shutdown = Arc::new(Notify::new());

    tracing::debug!(
        seed = settings.seed,
        tick_ms = settings.tick_interval.as_millis() as u64,
        spawn_every_ticks = settings.platform_tuning.spawn_every_ticks,
        "world configured"
    );

    // Subscribe before spawning so the first tick is not missed.
    tokio::spawn(world_update_serializer(
        world_tx.subscribe(),
        world_text_tx.clone(),
        world_latest_tx.clone(),
    ));
    tokio::spawn(server_state_serializer(
        server_state_tx.subscribe(),
        world_text_tx.clone(),
    ));

    let world = tokio::spawn(world_task(
        input_rx,
        world_tx.clone(),
        server_state_tx.clone(),
        settings,
        shutdown.clone(),
    ));

    let state = Arc::new(AppState {
        input_tx,
        world_tx,
        world_text_tx,
        world_latest_tx,
        server_state_tx,
        shutdown,
    });

    (state, world)
}

/// Asks the world task to stop and waits for it to exit.
pub async fn stop_world(state: &AppState, world: JoinHandle<()>) -> Result<()> {
    state.shutdown.notify_one();
    world.await.map_err(std::io::Error::other)
}

pub async fn run(settings: WorldSettings) -> Result<()> {
    let (state, mut world) = start(settings);

    let signal = tokio::select! {
        signal = tokio::signal::ctrl_c() => Some(signal),
        joined = &mut world => {
            joined.map_err(std::io::Error::other)?;
            None
        }
    };

    if let Some(signal) = signal {
        match &signal {
            Ok(()) => tracing::info!("shutdown requested"),
            Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
        }
        // Stop the world even when the signal listener failed.
        stop_world(&state, world).await?;
        signal?;
    }

    tracing::info!("world finished");
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    run(settings_from_env()).await
}
