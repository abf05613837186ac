// ============================================================================
// Currency Module
// Static currency metadata and validated currency codes
// ============================================================================
//
// The registry is read-only process data: lookups never allocate state and
// never fail. Unknown codes fall back to two decimal places; validation is
// the only operation that rejects a code.

mod code;
mod registry;

pub use code::CurrencyCode;
pub use registry::{
    decimal_places_for, is_registered, metadata_for, registered_codes, symbol_for, validate_code,
    CurrencyMetadata, ABSOLUTE_MAX_DECIMAL_PLACES, DEFAULT_DISPLAY_DECIMAL_PLACES,
    DEFAULT_MAX_QUANTIZING_DECIMAL_PLACES, NULL_CURRENCY_CODE,
};
