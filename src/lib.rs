//! # almanaut
//!
//! A typed Rust client for the Ex Libris Alma REST API.
//!
//! The client retrieves paginated, strongly-typed records from the Alma
//! acquisitions and electronic-resources endpoints and exposes them as
//! validated domain objects. When the caller asks for all matching
//! records, successive bounded-size requests are merged into one logical
//! payload before decoding.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use almanaut::AlmaClient;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> almanaut::Result<()> {
//!     let client = AlmaClient::new("my-api-key")?;
//!
//!     // One record, or None when nothing matched.
//!     let fund = client.get_fund("12345").await?;
//!
//!     // All matching records across every page.
//!     let po_lines = client.get_po_lines(5, true, HashMap::new()).await?;
//!
//!     if let Some(po_lines) = po_lines {
//!         println!("{} PO lines", po_lines.total_record_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Nothing is retried or recovered locally. A failure at any stage (probe
//! page, subsequent page, decode) aborts the whole retrieval and reaches
//! the caller as an [`Error`], with the original response body attached
//! for API errors.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]

/// Error types and the API error classifier
pub mod error;

/// HTTP transport
pub mod http;

/// Typed resource schemas
pub mod models;

/// Paginated record retrieval
pub mod pagination;

mod client;

pub use client::{AlmaClient, ExtraParams};
pub use error::{ApiErrorKind, Error, Result};
pub use http::ClientConfig;
