use crate::domain::Platform;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct PlatformConfig {
    pub spawn_every_ticks: u64,
}

/// Counts reported back to the world loop for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformTickOutcome {
    pub spawned: usize,
    pub retired: usize,
}

/// Advances every platform by one tick, retires fallen ones and spawns on cadence.
///
/// `tick` is the number of the tick being produced, starting at 1.
pub fn tick_platforms<R: Rng + ?Sized>(
    platforms: &mut Vec<Platform>,
    tick: u64,
    rng: &mut R,
    cfg: PlatformConfig,
) -> PlatformTickOutcome {
    // Each platform is replaced by its successor value.
    for p in platforms.iter_mut() {
        *p = p.to_next_tick();
    }

    let before = platforms.len();
    platforms.retain(|p| !p.is_below_world());
    let retired = before - platforms.len();

    let mut spawned = 0;
    if should_spawn(tick, cfg.spawn_every_ticks) {
        let platform = Platform::create_random_platform(rng);
        debug!(
            tick,
            x = platform.x,
            width = platform.width,
            "platform spawned"
        );
        platforms.push(platform);
        spawned = 1;
    }

    PlatformTickOutcome { spawned, retired }
}

fn should_spawn(tick: u64, every: u64) -> bool {
    // A cadence of 0 disables spawning.
    every != 0 && (tick == 1 || tick % every == 0)
}
