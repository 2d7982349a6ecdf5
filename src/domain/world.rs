// Fixed playable area shared by players and platforms.

/// World dimensions in pixels. Origin is top-left, +Y points down.
pub struct WorldBounds;

impl WorldBounds {
    pub const WIDTH: i32 = 1000;
    pub const HEIGHT: i32 = 800;
}
