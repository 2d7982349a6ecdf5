use crate::domain::{PlayerMove, PlayerSnapshot, SimPlayer, WorldBounds};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub max_step: i32, // px per tick, per axis

    pub max_x: i32,
    pub max_y: i32,
}

impl MovementConfig {
    /// Keeps a sprite of the given size fully inside the world.
    ///
    /// A negative `max_step` is treated as 0 (no movement).
    pub fn for_sprite(width: i32, height: i32, max_step: i32) -> Self {
        Self {
            max_step: max_step.max(0),
            max_x: (WorldBounds::WIDTH - width).max(0),
            max_y: (WorldBounds::HEIGHT - height).max(0),
        }
    }
}

/// Whole seconds covered by `ticks` ticks of `tick_interval` each.
pub fn age_after(ticks: u64, tick_interval: Duration) -> u32 {
    let nanos = tick_interval.as_nanos().saturating_mul(u128::from(ticks));
    u32::try_from(nanos / 1_000_000_000).unwrap_or(u32::MAX)
}

/// Builds the snapshot that replaces `current` for the next tick.
pub fn next_snapshot(
    current: &PlayerSnapshot,
    mv: PlayerMove,
    age: u32,
    cfg: MovementConfig,
) -> PlayerSnapshot {
    let dx = mv.dx.clamp(-cfg.max_step, cfg.max_step);
    let dy = mv.dy.clamp(-cfg.max_step, cfg.max_step);

    PlayerSnapshot {
        color: current.color.clone(),
        x: current.x.saturating_add(dx).clamp(0, cfg.max_x),
        y: current.y.saturating_add(dy).clamp(0, cfg.max_y),
        // Age never goes backwards within a session.
        age: age.max(current.age),
    }
}

/// Replaces every player's snapshot for tick number `tick` and clears buffered moves.
pub fn tick_players(
    players: &mut [SimPlayer],
    tick: u64,
    tick_interval: Duration,
    cfg: MovementConfig,
) {
    for p in players.iter_mut() {
        let age = age_after(tick.saturating_sub(p.joined_tick), tick_interval);
        p.snapshot = next_snapshot(&p.snapshot, p.pending_move, age, cfg);
        p.pending_move = PlayerMove::default();
    }
}
