// ============================================================================
// Serialization Module
// Interchange record and field-map adapters
// ============================================================================

mod record;

pub use record::MoneyRecord;
