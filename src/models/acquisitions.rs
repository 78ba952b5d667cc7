//! Acquisitions resource schemas
//!
//! Funds, fund transactions, PO lines, PO line items, invoices, invoice
//! lines, and licenses, as returned by the `acq/` endpoints.

use super::common::{date_z, date_z_opt, empty_string_as_none};
use super::{Code, CodeDesc, LinkedCode, OptionalCodeDesc};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Funds
// ============================================================================

/// The parent fund reference on a [`Fund`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundParent {
    pub value: i64,
    pub link: String,
}

/// A fund record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub id: String,
    pub link: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(rename = "type", default)]
    pub fund_type: Option<CodeDesc>,
    pub entity_type: CodeDesc,
    pub owner: CodeDesc,
    pub status: CodeDesc,
    #[serde(default)]
    pub description: Option<String>,
    pub fiscal_period: CodeDesc,
    pub currency: Code,
    pub allocated_balance: f64,
    pub expended_balance: f64,
    pub cash_balance: f64,
    pub encumbered_balance: f64,
    pub available_balance: f64,
    #[serde(rename = "available_for_library")]
    pub available_for_libraries: Vec<CodeDesc>,
    pub parent: FundParent,
    pub overencumbrance_allowed: CodeDesc,
    pub overexpenditure_allowed: CodeDesc,
    pub overencumbrance_warning_percent: i64,
    pub overexpenditure_warning_sum: f64,
    pub overencumbrance_limit_percent: i64,
    pub overexpenditure_limit_sum: f64,
    pub encumbrances_prior_to_fiscal_period: i64,
    pub expenditures_prior_to_fiscal_period: i64,
    pub transfers_prior_to_fiscal_period: i64,
    pub fiscal_period_end_encumbrance_grace_period: i64,
    pub fiscal_period_end_expenditure_grace_period: i64,
}

/// A page or merged collection of funds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funds {
    pub total_record_count: u64,
    #[serde(rename = "fund")]
    pub funds: Vec<Fund>,
}

// ============================================================================
// Fund transactions
// ============================================================================

/// A transaction against a fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTransaction {
    #[serde(default)]
    pub link: Option<String>,
    pub id: String,
    #[serde(deserialize_with = "date_z")]
    pub transaction_time: NaiveDate,
    #[serde(default)]
    pub payment_time: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: CodeDesc,
    pub amount: f64,
    pub currency: CodeDesc,
    #[serde(default)]
    pub transaction_note: Option<String>,
    pub po_line: LinkedCode,
    pub invoice_line: LinkedCode,
    pub reporting_code: String,
    pub secondary_reporting_code: String,
    pub tertiary_reporting_code: String,
    pub fourth_reporting_code: String,
    pub fifth_reporting_code: String,
}

/// A page or merged collection of fund transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTransactions {
    pub total_record_count: u64,
    #[serde(rename = "fund_transaction")]
    pub fund_transactions: Vec<FundTransaction>,
}

// ============================================================================
// PO lines
// ============================================================================

/// A money amount with its currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub sum: f64,
    pub currency: Code,
}

/// An amount where the API may send the sum as an empty string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sum: Option<f64>,
    pub currency: OptionalCodeDesc,
}

/// Bibliographic metadata attached to a PO line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    #[serde(default)]
    pub mms_id: Option<Code>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub issn: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_place: Option<String>,
    #[serde(default)]
    pub publication_year: Option<String>,
    #[serde(default)]
    pub vendor_title_number: Option<String>,
    #[serde(default)]
    pub title_id: Option<String>,
    #[serde(rename = "system_control_number", default)]
    pub system_control_numbers: Option<Vec<String>>,
}

/// How a PO line's cost is split across funds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLineFundDistribution {
    pub fund_code: CodeDesc,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub amount: Option<Amount>,
}

/// One received copy under a PO line location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyInfo {
    pub link: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub item_policy: Code,
    #[serde(default)]
    pub receive_date: Option<String>,
    #[serde(default)]
    pub enumeration_a: Option<String>,
    #[serde(default)]
    pub enumeration_b: Option<String>,
    #[serde(default)]
    pub enumeration_c: Option<String>,
    #[serde(default)]
    pub chronology_i: Option<String>,
    #[serde(default)]
    pub chronology_j: Option<String>,
    #[serde(default)]
    pub chronology_k: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub storage_location_id: Option<String>,
    #[serde(default)]
    pub is_temp_location: Option<bool>,
    #[serde(default)]
    pub permanent_library: Option<Code>,
    #[serde(default)]
    pub permanent_shelving_location: Option<String>,
}

/// A holdings location on a PO line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub quantity: i64,
    pub library: Code,
    pub shelving_location: String,
    #[serde(rename = "copy")]
    pub copies: Vec<CopyInfo>,
}

/// A user to be notified about PO line events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestedUser {
    pub primary_id: String,
    pub notify_receiving_activation: bool,
    pub hold_item: bool,
    pub notify_renewal: bool,
    pub notify_cancel: bool,
}

/// A free-text note on a PO line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLineNote {
    pub note_text: String,
}

/// A purchase order line record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLine {
    pub number: String,
    pub status: CodeDesc,
    #[serde(default)]
    pub link: Option<String>,
    pub owner: Code,
    #[serde(rename = "type")]
    pub line_type: CodeDesc,
    pub vendor: CodeDesc,
    pub vendor_account: String,
    #[serde(default)]
    pub reclaim_interval: Option<String>,
    #[serde(default)]
    pub expected_receipt_interval: Option<String>,
    #[serde(default)]
    pub claiming_interval: Option<String>,
    #[serde(default)]
    pub expected_activation_interval: Option<String>,
    #[serde(default)]
    pub subscription_interval: Option<String>,
    #[serde(default)]
    pub expected_activation_date: Option<String>,
    #[serde(default)]
    pub e_activation_due_interval: Option<String>,
    #[serde(default)]
    pub acquisition_method: Option<Code>,
    #[serde(default)]
    pub no_charge: Option<bool>,
    #[serde(default)]
    pub rush: Option<bool>,
    #[serde(default)]
    pub cancellation_restriction: Option<bool>,
    #[serde(default)]
    pub cancellation_restriction_note: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub discount: Option<String>,
    pub vendor_reference_number: String,
    #[serde(default)]
    pub vendor_reference_number_type: Option<Code>,
    pub source_type: Code,
    pub po_number: String,
    #[serde(default)]
    pub invoice_reference: Option<String>,
    pub resource_metadata: ResourceMetadata,
    #[serde(rename = "fund_distribution", default)]
    pub fund_distributions: Option<Vec<PoLineFundDistribution>>,
    #[serde(default)]
    pub reporting_code: Option<String>,
    #[serde(default)]
    pub secondary_reporting_code: Option<String>,
    #[serde(default)]
    pub tertiary_reporting_code: Option<String>,
    #[serde(default)]
    pub fourth_reporting_code: Option<String>,
    #[serde(default)]
    pub fifth_reporting_code: Option<String>,
    #[serde(default)]
    pub vendor_note: Option<String>,
    #[serde(default)]
    pub receiving_note: Option<String>,
    #[serde(rename = "alert", default)]
    pub alerts: Option<Vec<OptionalCodeDesc>>,
    #[serde(rename = "note", default)]
    pub notes: Option<Vec<PoLineNote>>,
    #[serde(rename = "location", default)]
    pub locations: Option<Vec<Location>>,
    #[serde(rename = "interested_user", default)]
    pub interested_users: Option<Vec<InterestedUser>>,
    #[serde(rename = "license", default)]
    pub license: Option<CodeDesc>,
    #[serde(default)]
    pub access_model: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub base_status: Option<String>,
    #[serde(default)]
    pub access_provider: Option<String>,
    #[serde(default)]
    pub manual_renewal: Option<bool>,
    #[serde(default)]
    pub renewal_cycle: Option<OptionalCodeDesc>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub subscription_from_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub subscription_to_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub renewal_date: Option<NaiveDate>,
    #[serde(default)]
    pub renewal_period: Option<String>,
    #[serde(default)]
    pub renewal_note: Option<String>,
    #[serde(default)]
    pub material_type: Option<CodeDesc>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub expected_receipt_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub created_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub status_date: Option<NaiveDate>,
}

/// A page or merged collection of PO lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLines {
    pub total_record_count: u64,
    #[serde(rename = "po_line")]
    pub po_lines: Vec<PoLine>,
}

// ============================================================================
// PO line items
// ============================================================================

/// Temporary-location holding data for a received item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingData {
    pub link: String,
    pub holding_id: String,
    pub copy_id: String,
    pub in_temp_location: bool,
    pub temp_library: Code,
    pub temp_location: Code,
    pub temp_call_number_type: Code,
    pub temp_call_number: String,
    pub temp_call_number_source: String,
    pub temp_policy: Code,
    pub due_back_date: String,
}

/// Physical item data for a received item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub barcode: String,
    pub physical_material_type: Code,
    pub policy: Code,
    pub provenance: Code,
    pub po_line: String,
    pub issue_date: String,
    pub is_magnetic: bool,
    pub arrival_date: String,
    pub expected_arrival_date: String,
    pub year_of_issue: String,
    pub enumeration_a: String,
    pub enumeration_b: String,
    pub enumeration_c: String,
    pub enumeration_d: String,
    pub enumeration_e: String,
    pub enumeration_f: String,
    pub enumeration_g: String,
    pub enumeration_h: String,
    pub chronology_i: String,
    pub chronology_j: String,
    pub chronology_k: String,
    pub chronology_l: String,
    pub chronology_m: String,
    pub break_indicator: Code,
    pub pattern_type: Code,
    pub linking_number: String,
    pub description: String,
    pub replacement_cost: i64,
    pub receiving_operator: String,
    pub inventory_number: String,
    pub inventory_date: String,
    pub inventory_price: String,
    pub receive_number: String,
    pub weeding_number: String,
    pub weeding_date: String,
    pub alternative_call_number: String,
    pub alternative_call_number_type: Code,
    pub alt_number_source: String,
    pub storage_location_id: String,
    pub pages: String,
    pub pieces: String,
    pub public_note: String,
    pub fulfillment_note: String,
    pub internal_note_1: String,
    pub internal_note_2: String,
    pub internal_note_3: String,
    pub statistics_note_1: String,
    pub statistics_note_2: String,
    pub statistics_note_3: String,
    pub physical_condition: Code,
}

/// One received item under a PO line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub link: String,
    pub holding_data: HoldingData,
    pub item_data: ItemData,
}

/// The item set received for a PO line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLineItems {
    pub total_record_count: u64,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

// ============================================================================
// Invoices
// ============================================================================

/// Pro-rated extra charges on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCharges {
    pub use_pro_rata: bool,
    pub shipment: i64,
    pub overhead: i64,
    pub insurance: i64,
    pub discount: i64,
}

/// VAT information at the invoice level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceVat {
    pub report_tax: bool,
    pub vat_per_invoice_line: bool,
    pub vat_code: Code,
    pub percentage: i64,
    pub vat_amount: f64,
    #[serde(rename = "type")]
    pub vat_type: Code,
    pub expended_from_fund: bool,
    #[serde(default)]
    pub vendor_tax: Option<String>,
}

/// Payment status and voucher details for an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub prepaid: bool,
    pub internal_copy: bool,
    #[serde(default)]
    pub export_to_erp: Option<bool>,
    pub payment_status: Code,
    pub voucher_date: String,
    pub voucher_number: String,
    pub voucher_amount: String,
    pub voucher_currency: Code,
}

/// An explicit currency conversion ratio on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplicitRatio {
    pub foreign_currency: Code,
    pub rate: i64,
}

/// A free-text note on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceNote {
    #[serde(default)]
    pub note_text: Option<String>,
}

/// VAT information at the invoice line level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineVat {
    pub vat_code: Code,
    pub percentage: i64,
    pub vat_amount: i64,
}

/// How an invoice line's cost is split across funds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineFundDistribution {
    pub fund_code: Code,
    pub percent: f64,
    pub amount: f64,
}

/// An invoice line record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub link: String,
    #[serde(rename = "type")]
    pub line_type: Code,
    pub number: String,
    pub po_line: String,
    pub price: f64,
    pub price_note: String,
    pub quantity: i64,
    pub vat_note: String,
    pub check_subscription_date_overlap: bool,
    pub fully_invoiced: bool,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub subscription_from_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub subscription_to_date: Option<NaiveDate>,
    #[serde(default)]
    pub additional_info: Option<String>,
    pub release_remaining_encumbrance: bool,
    #[serde(default)]
    pub reporting_code: Option<Code>,
    #[serde(default)]
    pub secondary_reporting_code: Option<Code>,
    #[serde(default)]
    pub tertiary_reporting_code: Option<OptionalCodeDesc>,
    pub note: String,
    pub invoice_line_vat: InvoiceLineVat,
    #[serde(rename = "fund_distribution")]
    pub fund_distributions: Vec<InvoiceLineFundDistribution>,
}

/// A page or merged collection of invoice lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLines {
    pub total_record_count: u64,
    #[serde(rename = "invoice_line")]
    pub invoice_lines: Vec<InvoiceLine>,
}

/// An invoice record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub link: String,
    pub number: String,
    #[serde(deserialize_with = "date_z")]
    pub invoice_date: NaiveDate,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub invoice_due_date: Option<NaiveDate>,
    pub vendor: Code,
    pub vendor_account: String,
    pub total_amount: i64,
    pub currency: Code,
    pub payment_method: Code,
    pub reference_number: String,
    pub owner: Code,
    pub additional_charges: AdditionalCharges,
    pub invoice_vat: InvoiceVat,
    #[serde(rename = "explicit_ratio")]
    pub explicit_ratios: Vec<ExplicitRatio>,
    pub payment: Payment,
    #[serde(rename = "note")]
    pub notes: Vec<InvoiceNote>,
    pub invoice_lines: InvoiceLines,
}

/// A page or merged collection of invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoices {
    pub total_record_count: u64,
    #[serde(rename = "invoice")]
    pub invoices: Vec<Invoice>,
}

// ============================================================================
// Licenses
// ============================================================================

/// The amendment count and link on a [`License`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendments {
    pub value: i64,
    pub link: String,
}

/// A negotiated license term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub code: CodeDesc,
    pub value: CodeDesc,
}

/// An electronic resource attached to a license
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicensedResource {
    pub pid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: CodeDesc,
    pub link: String,
}

/// A dated note on a license
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseNote {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(deserialize_with = "date_z")]
    pub creation_date: NaiveDate,
    pub created_by: String,
    #[serde(rename = "type", default)]
    pub note_type: Option<CodeDesc>,
}

/// A license administrator contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    pub email: String,
    pub primary_id: String,
    pub first_name: String,
    pub last_name: String,
    pub link: String,
}

/// A license record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub link: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub license_type: CodeDesc,
    pub status: CodeDesc,
    pub licensor: OptionalCodeDesc,
    #[serde(default)]
    pub signed_by: Option<String>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub signed_date: Option<NaiveDate>,
    #[serde(default)]
    pub second_party_signed_by: Option<String>,
    #[serde(default)]
    pub second_party_signed_date: Option<String>,
    #[serde(deserialize_with = "date_z")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<CodeDesc>,
    pub review_status: CodeDesc,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub amendments: Option<Amendments>,
    #[serde(default)]
    pub licensing_agent: Option<OptionalCodeDesc>,
    #[serde(rename = "term", default)]
    pub terms: Option<Vec<Term>>,
    #[serde(rename = "resource", default)]
    pub resources: Option<Vec<LicensedResource>>,
    #[serde(rename = "note", default)]
    pub notes: Option<Vec<LicenseNote>>,
    #[serde(rename = "administrator", default)]
    pub administrators: Option<Vec<Administrator>>,
}

/// A page or merged collection of licenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Licenses {
    pub total_record_count: u64,
    #[serde(rename = "license")]
    pub licenses: Vec<License>,
}
