//! Page accumulator
//!
//! Retrieval runs in two phases. A probe page at offset 0 learns
//! `total_record_count` and doubles as the result payload. If the caller
//! asked for all records and more exist, subsequent pages are fetched at a
//! fixed page size and their record arrays are concatenated onto the probe
//! payload under the collection key.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Page size used for every page after the probe during full retrieval,
/// independent of the caller-chosen first-page limit.
pub const SUBSEQUENT_PAGE_SIZE: u32 = 50;

/// One retrieval request against a single endpoint
///
/// `extra_params` is owned per request; two fetches never share a map.
#[derive(Debug, Clone)]
pub struct RecordFetch {
    /// Endpoint path below the API version, e.g. `acq/funds`
    pub endpoint: String,
    /// Field name under which records are nested, e.g. `fund`.
    /// Required whenever more than one page may be fetched.
    pub collection_key: Option<String>,
    /// First-page size
    pub limit: u32,
    /// Whether to retrieve every matching record
    pub fetch_all: bool,
    /// Opaque pass-through query parameters
    pub extra_params: HashMap<String, String>,
}

impl RecordFetch {
    /// A singleton lookup: one record, one page
    pub fn single(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            collection_key: None,
            limit: 1,
            fetch_all: false,
            extra_params: HashMap::new(),
        }
    }

    /// A collection query with its record array under `collection_key`
    pub fn collection(
        endpoint: impl Into<String>,
        collection_key: impl Into<String>,
        limit: u32,
        fetch_all: bool,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            collection_key: Some(collection_key.into()),
            limit,
            fetch_all,
            extra_params: HashMap::new(),
        }
    }

    /// Replace the extra query parameters
    #[must_use]
    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.extra_params = params;
        self
    }

    /// Add one extra query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }
}

/// Drives repeated transport calls and merges pages into one payload
///
/// Pages are strictly ordered: page N+1's offset and the termination check
/// depend on page N's reported total, so no two calls of one fetch overlap.
/// The accumulator holds no state across fetch invocations.
#[derive(Debug)]
pub struct PageAccumulator<'a> {
    transport: &'a HttpClient,
}

impl<'a> PageAccumulator<'a> {
    /// Create an accumulator over a transport
    pub fn new(transport: &'a HttpClient) -> Self {
        Self { transport }
    }

    /// Retrieve all pages for a request and merge them into one payload
    ///
    /// Returns `Ok(None)` when zero records matched (distinct from a
    /// successful response with an empty shape). Any failure on any page
    /// aborts the whole fetch; partial accumulations are discarded.
    pub async fn fetch(&self, request: &RecordFetch) -> Result<Option<Value>> {
        let body = self
            .transport
            .fetch_page(&request.endpoint, request.limit, 0, &request.extra_params)
            .await?;
        let mut payload: Value = serde_json::from_str(&body)?;

        // Singleton endpoints omit the count entirely.
        let total = payload
            .get("total_record_count")
            .and_then(Value::as_u64)
            .unwrap_or(1);

        if total == 0 {
            debug!(endpoint = %request.endpoint, "no records matched");
            return Ok(None);
        }
        if !request.fetch_all {
            return Ok(Some(payload));
        }

        let key = request.collection_key.as_deref().ok_or_else(|| {
            Error::invalid_request("full retrieval requires a collection key")
        })?;

        let mut records_requested = u64::from(request.limit);
        while records_requested < total {
            let body = self
                .transport
                .fetch_page(
                    &request.endpoint,
                    SUBSEQUENT_PAGE_SIZE,
                    records_requested,
                    &request.extra_params,
                )
                .await?;
            let mut page: Value = serde_json::from_str(&body)?;
            // The tail request may ask for more records than remain; the
            // API tolerates the overshoot.
            records_requested += u64::from(SUBSEQUENT_PAGE_SIZE);

            merge_records(&mut payload, &mut page, key)?;
        }

        debug!(
            endpoint = %request.endpoint,
            total,
            records_requested,
            "full retrieval complete"
        );
        Ok(Some(payload))
    }
}

/// Concatenate `page`'s record array onto `payload`'s under `key`
///
/// Insertion order is page arrival order, which is ascending offset order.
fn merge_records(payload: &mut Value, page: &mut Value, key: &str) -> Result<()> {
    let incoming = match page.get_mut(key).map(Value::take) {
        Some(Value::Array(records)) => records,
        _ => {
            return Err(Error::malformed(format!(
                "page is missing record array under key '{key}'"
            )))
        }
    };

    match payload.get_mut(key) {
        Some(Value::Array(accumulated)) => {
            accumulated.extend(incoming);
            Ok(())
        }
        _ => Err(Error::malformed(format!(
            "accumulated payload is missing record array under key '{key}'"
        ))),
    }
}
