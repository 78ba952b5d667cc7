//! The Alma API client
//!
//! One accessor per resource type. Each accessor fixes the endpoint path,
//! the collection key, and the schema to decode into, then runs the page
//! accumulator. Singleton accessors always fetch a single record;
//! collection accessors expose `limit`, `all_records`, and `extra_params`
//! to the caller verbatim.

use crate::error::Result;
use crate::http::{ClientConfig, HttpClient};
use crate::models::acquisitions::{
    Fund, FundTransactions, Funds, Invoice, InvoiceLine, InvoiceLines, Invoices, License,
    Licenses, PoLine, PoLineItems, PoLines,
};
use crate::models::electronic::{
    ElectronicCollection, ElectronicCollections, ElectronicService, ElectronicServices, Portfolio,
    Portfolios,
};
use crate::pagination::{PageAccumulator, RecordFetch};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Alias for the per-call query parameter map
pub type ExtraParams = HashMap<String, String>;

/// The Alma API client
///
/// # Example
///
/// ```rust,no_run
/// use almanaut::AlmaClient;
///
/// # async fn run() -> almanaut::Result<()> {
/// let client = AlmaClient::new("my-api-key")?;
/// if let Some(fund) = client.get_fund("12345").await? {
///     println!("{}: {}", fund.code, fund.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AlmaClient {
    http: HttpClient,
}

impl AlmaClient {
    /// Create a client with the default host, URL prefix, and API version
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit config
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Run a retrieval request and decode the merged payload
    ///
    /// `Ok(None)` means zero records matched; decode failures propagate
    /// unchanged.
    async fn fetch_decoded<T: DeserializeOwned>(&self, fetch: RecordFetch) -> Result<Option<T>> {
        let accumulator = PageAccumulator::new(&self.http);
        match accumulator.fetch(&fetch).await? {
            Some(payload) => {
                debug!(endpoint = %fetch.endpoint, "decoding payload");
                Ok(Some(serde_json::from_value(payload)?))
            }
            None => Ok(None),
        }
    }

    // ========================================================================
    // Acquisitions
    // ========================================================================

    /// Get a fund record
    pub async fn get_fund(&self, fund_id: &str) -> Result<Option<Fund>> {
        let fetch = RecordFetch::single(format!("acq/funds/{fund_id}")).param("view", "full");
        self.fetch_decoded(fetch).await
    }

    /// Get fund records
    ///
    /// `extra_params` can include `view` (brief|full); the full view is
    /// requested by default.
    pub async fn get_funds(
        &self,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<Funds>> {
        let fetch = RecordFetch::collection("acq/funds", "fund", limit, all_records)
            .with_params(extra_params)
            .param("view", "full");
        self.fetch_decoded(fetch).await
    }

    /// Get transaction records for a fund
    pub async fn get_fund_transactions(
        &self,
        fund_id: &str,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<FundTransactions>> {
        let fetch = RecordFetch::collection(
            format!("acq/funds/{fund_id}/transactions"),
            "fund_transaction",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get an invoice record
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Option<Invoice>> {
        self.fetch_decoded(RecordFetch::single(format!("acq/invoices/{invoice_id}")))
            .await
    }

    /// Get invoice records
    ///
    /// `extra_params` can include `base_status`, `creation_form`, `expand`,
    /// `invoice_workflow_status`, `owner`, and `view`.
    pub async fn get_invoices(
        &self,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<Invoices>> {
        let fetch = RecordFetch::collection("acq/invoices", "invoice", limit, all_records)
            .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get an invoice line record
    pub async fn get_invoice_line(
        &self,
        invoice_id: &str,
        invoice_line_id: &str,
    ) -> Result<Option<InvoiceLine>> {
        let fetch = RecordFetch::single(format!(
            "acq/invoices/{invoice_id}/lines/{invoice_line_id}"
        ));
        self.fetch_decoded(fetch).await
    }

    /// Get invoice line records for an invoice
    pub async fn get_invoice_lines(
        &self,
        invoice_id: &str,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<InvoiceLines>> {
        let fetch = RecordFetch::collection(
            format!("acq/invoices/{invoice_id}/lines"),
            "invoice_line",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get a license record
    pub async fn get_license(&self, code: &str) -> Result<Option<License>> {
        self.fetch_decoded(RecordFetch::single(format!("acq/licenses/{code}")))
            .await
    }

    /// Get license records
    pub async fn get_licenses(
        &self,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<Licenses>> {
        let fetch = RecordFetch::collection("acq/licenses", "license", limit, all_records)
            .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get a PO line record
    pub async fn get_po_line(&self, number: &str) -> Result<Option<PoLine>> {
        self.fetch_decoded(RecordFetch::single(format!("acq/po-lines/{number}")))
            .await
    }

    /// Get PO line records
    ///
    /// `extra_params` can include `acquisition_method`, `expand`, `status`,
    /// and a `q` search expression (e.g. `title~spenser`).
    pub async fn get_po_lines(
        &self,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<PoLines>> {
        let fetch = RecordFetch::collection("acq/po-lines", "po_line", limit, all_records)
            .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get the items received for a PO line
    pub async fn get_po_line_items(
        &self,
        number: &str,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<PoLineItems>> {
        let fetch = RecordFetch::collection(
            format!("acq/po-lines/{number}/items"),
            "item",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    // ========================================================================
    // Electronic resources
    // ========================================================================

    /// Get an electronic collection record
    pub async fn get_electronic_collection(
        &self,
        collection_id: &str,
    ) -> Result<Option<ElectronicCollection>> {
        let fetch = RecordFetch::single(format!("electronic/e-collections/{collection_id}"));
        self.fetch_decoded(fetch).await
    }

    /// Get electronic collection records
    pub async fn get_electronic_collections(
        &self,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<ElectronicCollections>> {
        let fetch = RecordFetch::collection(
            "electronic/e-collections",
            "electronic_collection",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get an electronic service record
    pub async fn get_electronic_service(
        &self,
        collection_id: &str,
        service_id: &str,
    ) -> Result<Option<ElectronicService>> {
        let fetch = RecordFetch::single(format!(
            "electronic/e-collections/{collection_id}/e-services/{service_id}"
        ));
        self.fetch_decoded(fetch).await
    }

    /// Get electronic service records for a collection
    pub async fn get_electronic_services(
        &self,
        collection_id: &str,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<ElectronicServices>> {
        let fetch = RecordFetch::collection(
            format!("electronic/e-collections/{collection_id}/e-services"),
            "electronic_service",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }

    /// Get a portfolio record
    pub async fn get_portfolio(
        &self,
        collection_id: &str,
        service_id: &str,
        portfolio_id: &str,
    ) -> Result<Option<Portfolio>> {
        let fetch = RecordFetch::single(format!(
            "electronic/e-collections/{collection_id}/e-services/{service_id}/portfolios/{portfolio_id}"
        ));
        self.fetch_decoded(fetch).await
    }

    /// Get portfolio records for a service
    pub async fn get_portfolios(
        &self,
        collection_id: &str,
        service_id: &str,
        limit: u32,
        all_records: bool,
        extra_params: ExtraParams,
    ) -> Result<Option<Portfolios>> {
        let fetch = RecordFetch::collection(
            format!("electronic/e-collections/{collection_id}/e-services/{service_id}/portfolios"),
            "portfolio",
            limit,
            all_records,
        )
        .with_params(extra_params);
        self.fetch_decoded(fetch).await
    }
}
