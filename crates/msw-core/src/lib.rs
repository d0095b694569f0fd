//! msw-core: shared foundation for the multi-segment well crates.
//!
//! Contains:
//! - units (uom length type and deck unit systems)
//! - numeric (Real and the "not yet known" sentinel)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::CoreError;
pub use numeric::*;
pub use units::*;
