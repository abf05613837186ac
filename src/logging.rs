// ============================================================================
// Logging
// Optional tracing subscriber setup for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber that prints events up to `level`.
///
/// Fails if a global subscriber is already set.
pub fn init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
