// ============================================================================
// Utilities Module
// Helper functions shared by the value type and its adapters
// ============================================================================

mod formatting;

pub use formatting::{format_grouped, format_plain};
