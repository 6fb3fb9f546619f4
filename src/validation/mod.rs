//! Field validation
//!
//! Pure functions that map raw input strings to a [`Verdict`]. Nothing in this
//! module panics or returns an error for bad input; rejections are data.

mod address;
mod amount;
mod verdict;

pub use address::{validate_address, Address};
pub use amount::{to_base_units, validate_amount, DEFAULT_DECIMALS};
pub use verdict::{Rejection, Verdict};

use crate::state::FieldName;

/// Validate a single field by name
pub fn validate_field(name: FieldName, raw: &str, decimals: u8) -> Verdict {
    match name {
        FieldName::TokenAddress => validate_address(raw),
        FieldName::TokenAmount => validate_amount(raw, decimals),
    }
}
