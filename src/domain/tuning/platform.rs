/// Gameplay tuning for platform spawning.
///
/// Platform sizes and gravity are fixed on `Platform`; this only covers cadence.
#[derive(Debug, Clone, Copy)]
pub struct PlatformTuning {
    /// Ticks between two platform spawns.
    pub spawn_every_ticks: u64,
}

impl Default for PlatformTuning {
    fn default() -> Self {
        Self {
            spawn_every_ticks: 45,
        }
    }
}
