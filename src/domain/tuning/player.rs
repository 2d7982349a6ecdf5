/// Gameplay tuning for player avatars.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Sprite width in pixels.
    pub width: i32,

    /// Sprite height in pixels.
    pub height: i32,

    /// Largest movement per axis applied in a single tick, in pixels.
    pub max_step: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 40,
            height: 60,
            max_step: 12,
        }
    }
}
