//! Typed resource schemas
//!
//! Statically declared response shapes, one struct per resource, validated
//! at the decode boundary: missing required fields fail decoding, unknown
//! extra fields are ignored. Plural wrappers pair `total_record_count` with
//! the record array the API nests under a singular alias (`fund`,
//! `invoice`, `po_line`, ...).

mod common;

pub mod acquisitions;
pub mod electronic;

pub use common::{Code, CodeDesc, LinkedCode, OptionalCodeDesc};

#[cfg(test)]
mod tests;
