use super::types::{GameEvent, ServerState, WorldUpdate};
use crate::domain::systems::platforms::{self, PlatformConfig};
use crate::domain::systems::players::{self, MovementConfig};
use crate::domain::tuning::platform::PlatformTuning;
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::{Platform, PlayerMove, PlayerSnapshot, SimPlayer, WorldBounds, player};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// Settings for a single world instance.
#[derive(Debug, Clone)]
pub struct WorldSettings {
    /// Fixed tick interval for the game loop.
    pub tick_interval: Duration,
    /// Seed for platform layout and player colors.
    pub seed: u64,
    /// Stop simulating after this many ticks (`None` runs until shutdown).
    pub tick_limit: Option<u64>,
    pub platform_tuning: PlatformTuning,
    pub player_tuning: PlayerTuning,
}

/// Rejected game events.
#[derive(Debug, PartialEq, Eq)]
pub enum WorldError {
    AlreadyJoined { player_id: u64 },
    UnknownPlayer { player_id: u64 },
}

/// Authoritative world state advanced one tick at a time.
///
/// The RNG lives here so it is only ever touched by the task that owns the world.
pub struct World {
    settings: WorldSettings,
    rng: Pcg32,
    tick: u64,
    players: Vec<SimPlayer>,
    platforms: Vec<Platform>,
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            rng,
            tick: 0,
            players: Vec::new(),
            platforms: Vec::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn player(&self, player_id: u64) -> Option<&PlayerSnapshot> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| &p.snapshot)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Applies a player event; movement is buffered until the next `step`.
    pub fn apply_event(&mut self, event: GameEvent) -> Result<(), WorldError> {
        match event {
            GameEvent::Join { player_id } => {
                if self.players.iter().any(|p| p.id == player_id) {
                    return Err(WorldError::AlreadyJoined { player_id });
                }
                let tuning = self.settings.player_tuning;
                let color = player::random_color(&mut self.rng);
                // Spawn centered on the floor.
                let x = ((WorldBounds::WIDTH - tuning.width) / 2).max(0);
                let y = (WorldBounds::HEIGHT - tuning.height).max(0);
                info!(player_id, %color, "player joined");
                self.players.push(SimPlayer::new(
                    player_id,
                    PlayerSnapshot::joined(color, x, y),
                    self.tick,
                ));
                Ok(())
            }
            GameEvent::Leave { player_id } => {
                let before = self.players.len();
                self.players.retain(|p| p.id != player_id);
                if self.players.len() == before {
                    return Err(WorldError::UnknownPlayer { player_id });
                }
                info!(player_id, "player left");
                Ok(())
            }
            GameEvent::Move { player_id, dx, dy } => {
                let p = self
                    .players
                    .iter_mut()
                    .find(|p| p.id == player_id)
                    .ok_or(WorldError::UnknownPlayer { player_id })?;
                // Accumulate so several inputs within one tick are not lost.
                p.pending_move = PlayerMove {
                    dx: p.pending_move.dx.saturating_add(dx),
                    dy: p.pending_move.dy.saturating_add(dy),
                };
                Ok(())
            }
        }
    }

    /// Advances the world by one tick and returns the resulting snapshot.
    pub fn step(&mut self) -> WorldUpdate {
        self.tick += 1;
        let tick = self.tick;

        let outcome = platforms::tick_platforms(
            &mut self.platforms,
            tick,
            &mut self.rng,
            PlatformConfig {
                spawn_every_ticks: self.settings.platform_tuning.spawn_every_ticks,
            },
        );

        let tuning = self.settings.player_tuning;
        players::tick_players(
            &mut self.players,
            tick,
            self.settings.tick_interval,
            MovementConfig::for_sprite(tuning.width, tuning.height, tuning.max_step),
        );

        if outcome.spawned > 0 || outcome.retired > 0 {
            debug!(
                tick,
                platforms = self.platforms.len(),
                spawned = outcome.spawned,
                retired = outcome.retired,
                "platforms changed"
            );
        }

        self.snapshot()
    }

    /// Snapshot of the last completed tick.
    pub fn snapshot(&self) -> WorldUpdate {
        WorldUpdate {
            tick: self.tick,
            server_age: players::age_after(self.tick, self.settings.tick_interval),
            players: self.players.iter().map(|p| p.snapshot.clone()).collect(),
            platforms: self.platforms.clone(),
        }
    }

    fn limit_reached(&self) -> bool {
        self.settings
            .tick_limit
            .is_some_and(|limit| limit != 0 && self.tick >= limit)
    }
}

pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    server_state_tx: watch::Sender<ServerState>,
    settings: WorldSettings,
    shutdown: Arc<Notify>,
) {
    let tick_interval = settings.tick_interval;
    let mut world = World::new(settings);

    server_state_tx.send_replace(ServerState::Running);
    info!(
        tick_ms = tick_interval.as_millis() as u64,
        "world running"
    );

    // Drive the fixed-step game loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick = world.tick(), "world shutting down");
                break;
            }
            _ = interval.tick() => {}
        }

        loop {
            match input_rx.try_recv() {
                Ok(ev) => {
                    if let Err(e) = world.apply_event(ev) {
                        warn!(error = ?e, "dropping game event");
                    }
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    warn!("input channel closed; world exiting");
                    server_state_tx.send_replace(ServerState::Ended);
                    return;
                }
            }
        }

        let update = world.step();
        // No subscribers is fine; updates are simply dropped.
        let _ = world_tx.send(update);

        if world.limit_reached() {
            info!(tick = world.tick(), "tick limit reached");
            break;
        }
    }

    server_state_tx.send_replace(ServerState::Ended);
}
