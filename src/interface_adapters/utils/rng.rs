/// Fresh seed from the thread-local OS-seeded generator.
///
/// Used when no fixed world seed is configured.
pub fn entropy_seed() -> u64 {
    rand::random()
}
