//! Paginated record retrieval
//!
//! The accumulator drives repeated transport calls against an
//! offset-paginated endpoint and merges the per-page record arrays into one
//! logical payload, equivalent to what a single unpaginated call would
//! return.

mod accumulator;

pub use accumulator::{PageAccumulator, RecordFetch, SUBSEQUENT_PAGE_SIZE};
