use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

const DEFAULT_TICK_RATE_HZ: u64 = 30;
const MAX_TICK_RATE_HZ: u64 = 1000;

pub fn tick_interval() -> Duration {
    let hz = env::var("TICK_RATE_HZ")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|hz| (1..=MAX_TICK_RATE_HZ).contains(hz))
        .unwrap_or(DEFAULT_TICK_RATE_HZ);
    Duration::from_nanos(1_000_000_000 / hz)
}

/// Platform spawn cadence override; `None` keeps the tuning default.
pub fn platform_spawn_every_ticks() -> Option<u64> {
    env::var("PLATFORM_SPAWN_EVERY_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
}

/// Fixed world seed for reproducible runs.
pub fn world_seed() -> Option<u64> {
    env::var("WORLD_SEED").ok().and_then(|v| v.parse().ok())
}

// 0 or unset disables the limit.
pub fn match_tick_limit() -> Option<u64> {
    env::var("MATCH_TICK_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|limit| *limit != 0)
}
