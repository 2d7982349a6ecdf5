// Domain layer: core simulation types and rules.

pub mod platform;
pub mod player;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use platform::Platform;
pub use player::PlayerSnapshot;
pub use state::{PlayerMove, SimPlayer};
pub use world::WorldBounds;
