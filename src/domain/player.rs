// Per-tick view of a connected player.

/// Rendering-relevant player state for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// CSS compatible color string.
    pub color: String,
    pub x: i32,
    pub y: i32,
    /// Whole seconds since the player joined.
    pub age: u32,
}

impl PlayerSnapshot {
    /// Snapshot for a player that just connected.
    pub fn joined(color: String, x: i32, y: i32) -> Self {
        Self { color, x, y, age: 0 }
    }
}

/// Random opaque `#rrggbb` color.
pub fn random_color<R: rand::Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xff_ffff_u32))
}
