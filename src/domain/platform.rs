// Falling platforms: random spawning at the top of the world and per-tick gravity.

use crate::domain::world::WorldBounds;
use rand::Rng;

/// A horizontal platform. Values are replaced every tick, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl Platform {
    pub const MIN_WIDTH: i32 = 100;
    pub const MAX_WIDTH: i32 = 300;
    /// Pixels a platform falls per tick.
    pub const PLATFORM_GRAVITY: i32 = 5;

    /// Spawns a platform at the top of the world that fits horizontally.
    pub fn create_random_platform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let width = rng.random_range(Self::MIN_WIDTH..=Self::MAX_WIDTH);
        let x = rng.random_range(0..=WorldBounds::WIDTH - width);
        Self { x, y: 0, width }
    }

    /// Returns the platform one tick later. Does not validate `self`.
    pub fn to_next_tick(self) -> Self {
        Self {
            y: self.y + Self::PLATFORM_GRAVITY,
            ..self
        }
    }

    /// True once the platform has fallen past the bottom of the world.
    pub fn is_below_world(&self) -> bool {
        self.y > WorldBounds::HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const RANDOM_TEST_ITERATIONS: usize = 100;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0x5eed)
    }

    #[test]
    fn random_platform_spawns_at_top() {
        let mut rng = rng();
        for _ in 0..RANDOM_TEST_ITERATIONS {
            assert_eq!(Platform::create_random_platform(&mut rng).y, 0);
        }
    }

    #[test]
    fn random_platform_width_within_bounds() {
        let mut rng = rng();
        for _ in 0..RANDOM_TEST_ITERATIONS {
            let platform = Platform::create_random_platform(&mut rng);
            assert!(platform.width >= Platform::MIN_WIDTH);
            assert!(platform.width <= Platform::MAX_WIDTH);
        }
    }

    #[test]
    fn random_platform_x_within_bounds() {
        let mut rng = rng();
        for _ in 0..RANDOM_TEST_ITERATIONS {
            let platform = Platform::create_random_platform(&mut rng);
            assert!(platform.x >= 0);
            assert!(platform.x <= WorldBounds::WIDTH - platform.width);
        }
    }

    #[test]
    fn random_platform_reaches_every_boundary() {
        let mut rng = rng();
        let (mut min_width, mut max_width, mut left_edge, mut right_edge) =
            (false, false, false, false);

        for _ in 0..200_000 {
            let platform = Platform::create_random_platform(&mut rng);
            min_width |= platform.width == Platform::MIN_WIDTH;
            max_width |= platform.width == Platform::MAX_WIDTH;
            left_edge |= platform.x == 0;
            right_edge |= platform.x + platform.width == WorldBounds::WIDTH;
            if min_width && max_width && left_edge && right_edge {
                break;
            }
        }

        assert!(min_width, "MIN_WIDTH never drawn");
        assert!(max_width, "MAX_WIDTH never drawn");
        assert!(left_edge, "x == 0 never drawn");
        assert!(right_edge, "x == WIDTH - width never drawn");
    }

    #[test]
    fn random_platform_works_with_thread_rng() {
        let platform = Platform::create_random_platform(&mut rand::rng());
        assert!(platform.x + platform.width <= WorldBounds::WIDTH);
    }

    #[test]
    fn same_seed_generates_same_platforms() {
        let mut a = rng();
        let mut b = rng();
        for _ in 0..10 {
            assert_eq!(
                Platform::create_random_platform(&mut a),
                Platform::create_random_platform(&mut b)
            );
        }
    }

    #[test]
    fn next_tick_zeroed_values_only_changes_y() {
        let origin = Platform { x: 0, y: 0, width: 0 };
        let next = origin.to_next_tick();

        let expected = Platform {
            x: 0,
            y: Platform::PLATFORM_GRAVITY,
            width: 0,
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn next_tick_accepts_out_of_range_input() {
        let odd = Platform { x: -20, y: -3, width: -7 };
        let next = odd.to_next_tick();
        assert_eq!(next.x, -20);
        assert_eq!(next.width, -7);
        assert_eq!(next.y, -3 + Platform::PLATFORM_GRAVITY);
    }

    #[test]
    fn bounds_hold_across_many_ticks() {
        let mut rng = rng();
        for _ in 0..RANDOM_TEST_ITERATIONS {
            let spawned = Platform::create_random_platform(&mut rng);
            let mut platform = spawned;
            for tick in 1..=50 {
                platform = platform.to_next_tick();
                assert_eq!(platform.x, spawned.x);
                assert_eq!(platform.width, spawned.width);
                assert_eq!(platform.y, tick * Platform::PLATFORM_GRAVITY);
                assert!(platform.x + platform.width <= WorldBounds::WIDTH);
            }
        }
    }

    #[test]
    fn below_world_only_past_height() {
        let at_floor = Platform { x: 0, y: WorldBounds::HEIGHT, width: 100 };
        assert!(!at_floor.is_below_world());
        assert!(at_floor.to_next_tick().is_below_world());
    }
}
