//! Electronic resource schemas
//!
//! Electronic collections, their services, and portfolios, as returned by
//! the `electronic/` endpoints. `ElectronicServices` and `Portfolios` allow
//! a null `total_record_count`; Alma omits it on some of these endpoints.

use super::common::{date_z, date_z_opt};
use super::{Code, CodeDesc, LinkedCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-campus-group overrides on a collection, service, or portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSetting {
    pub group: Code,
    pub proxy_enabled: Code,
    pub proxy: String,
    pub public_name: String,
    pub authentication_note: String,
    pub public_note: String,
}

/// A dated note on an electronic resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceNote {
    pub content: String,
    #[serde(deserialize_with = "date_z")]
    pub creation_date: NaiveDate,
    pub created_by: String,
    #[serde(rename = "type")]
    pub note_type: String,
}

/// Portfolio count plus a link to the portfolio listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCount {
    pub value: u64,
    #[serde(default)]
    pub link: Option<String>,
}

// ============================================================================
// Electronic collections
// ============================================================================

/// CDI (central discovery index) attributes of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdiInfo {
    #[serde(default)]
    pub cdi_collection_id: Option<String>,
    #[serde(default)]
    pub number_of_records_in_cdi: Option<i64>,
    #[serde(default)]
    pub cdi_update_frequency: Option<CodeDesc>,
    #[serde(default)]
    pub search_rights_in_cdi: Option<CodeDesc>,
    #[serde(default)]
    pub full_text_linking_in_cdi: Option<CodeDesc>,
    #[serde(default)]
    pub cdi_newspapers_search: Option<CodeDesc>,
    #[serde(default)]
    pub provider_coverage: Option<bool>,
    #[serde(default)]
    pub resource_types: Option<String>,
    #[serde(default)]
    pub full_text_rights_in_cdi: Option<CodeDesc>,
    #[serde(default)]
    pub cdi_type: Option<CodeDesc>,
    #[serde(default)]
    pub coverage_percentage: Option<String>,
}

/// The provider interface a collection is delivered through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInterface {
    pub name: String,
}

/// Bibliographic metadata attached to a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResourceMetadata {
    pub mms_id: Code,
}

/// An electronic collection record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicCollection {
    pub id: String,
    #[serde(default)]
    pub is_local: Option<bool>,
    pub link: String,
    pub public_name: String,
    pub description: String,
    #[serde(default)]
    pub description_override: Option<String>,
    #[serde(default)]
    pub internal_description: Option<String>,
    #[serde(default)]
    pub library: Option<Code>,
    #[serde(rename = "type")]
    pub collection_type: CodeDesc,
    #[serde(default)]
    pub interface: Option<CollectionInterface>,
    #[serde(default)]
    pub is_selective: Option<CodeDesc>,
    #[serde(default)]
    pub access_type: Option<Code>,
    pub counter_platform: CodeDesc,
    #[serde(default)]
    pub po_line: Option<Code>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub activation_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub expected_activation_date: Option<NaiveDate>,
    #[serde(rename = "license", default)]
    pub license: Option<Code>,
    #[serde(default)]
    pub number: Option<Vec<Code>>,
    #[serde(default)]
    pub alternative_title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_override: Option<String>,
    #[serde(default)]
    pub free: Option<Code>,
    #[serde(default)]
    pub proxy_enabled: Option<Code>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub language: Option<Code>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub resource_metadata: Option<CollectionResourceMetadata>,
    #[serde(default)]
    pub authentication_note: Option<String>,
    #[serde(default)]
    pub public_note: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<ResourceNote>>,
    #[serde(default)]
    pub group_settings: Option<Vec<GroupSetting>>,
    pub portfolios: PortfolioCount,
    #[serde(default)]
    pub do_not_show_as_full_text_available_in_cdi_even_if_active_in_alma: Option<bool>,
    #[serde(default)]
    pub cdi_search_activation_status: Option<bool>,
    #[serde(default)]
    pub cdi_only_full_text_activation: Option<bool>,
    #[serde(default)]
    pub cdi_local_notes: Option<String>,
    pub cdi_info: CdiInfo,
}

/// A page or merged collection of electronic collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicCollections {
    pub total_record_count: u64,
    #[serde(rename = "electronic_collection")]
    pub electronic_collections: Vec<ElectronicCollection>,
}

// ============================================================================
// Electronic services
// ============================================================================

/// An electronic service record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicService {
    pub id: String,
    pub link: String,
    pub is_local: bool,
    #[serde(rename = "type")]
    pub service_type: CodeDesc,
    pub public_description: String,
    #[serde(default)]
    pub internal_description: Option<String>,
    pub public_description_override: String,
    pub activation_status: CodeDesc,
    #[serde(default)]
    pub activate_new_portfolios: Option<bool>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub active_from_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub active_until_date: Option<NaiveDate>,
    #[serde(default)]
    pub service_temporarily_unavailable: Option<Code>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub service_unavailable_date: Option<NaiveDate>,
    #[serde(default)]
    pub service_unavailable_reason: Option<String>,
    #[serde(default)]
    pub parser: Option<String>,
    #[serde(default)]
    pub parser_override: Option<String>,
    #[serde(default)]
    pub parser_parameters: Option<String>,
    #[serde(default)]
    pub parser_parameters_override: Option<String>,
    #[serde(default)]
    pub link_resolver_plugin: Option<Code>,
    #[serde(default)]
    pub url_type: Option<Code>,
    #[serde(default)]
    pub url_type_override: Option<Code>,
    #[serde(default)]
    pub dynamic_url: Option<String>,
    #[serde(default)]
    pub dynamic_url_override: Option<String>,
    #[serde(default)]
    pub free: Option<Code>,
    #[serde(default)]
    pub crossref_supported: Option<Code>,
    #[serde(default)]
    pub crossref_enabled: Option<Code>,
    #[serde(default)]
    pub proxy_enabled: Option<Code>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub linking_level: Option<Code>,
    #[serde(default)]
    pub authentication_note: Option<String>,
    #[serde(default)]
    pub public_note: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<ResourceNote>>,
    #[serde(default)]
    pub group_settings: Option<Vec<GroupSetting>>,
    pub portfolios: PortfolioCount,
}

/// A page or merged collection of electronic services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicServices {
    #[serde(default)]
    pub total_record_count: Option<u64>,
    #[serde(rename = "electronic_service")]
    pub electronic_services: Vec<ElectronicService>,
}

// ============================================================================
// Portfolios
// ============================================================================

/// Bibliographic metadata attached to a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResourceMetadata {
    pub mms_id: LinkedCode,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub issn: Option<String>,
}

/// URL and parser settings for a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkingDetails {
    pub url: String,
    pub url_type: Code,
    pub url_type_override: Code,
    pub dynamic_url: String,
    pub dynamic_url_override: String,
    pub static_url: String,
    pub static_url_override: String,
    pub parser_parameters: String,
    pub parser_parameters_override: String,
    pub proxy_enabled: Code,
    pub proxy: String,
}

/// One from/until coverage window
///
/// The same shape serves the global, local, and perpetual coverage lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateCoverageParameters {
    pub from_year: String,
    pub from_month: Code,
    pub from_day: Code,
    pub from_volume: String,
    pub from_issue: String,
    pub until_year: String,
    pub until_month: Code,
    pub until_day: Code,
    pub until_volume: String,
    pub until_issue: String,
}

/// An embargo window expressed in years and months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbargoInformation {
    pub embargo_operator: Code,
    pub number_of_years: String,
    pub number_of_months: String,
}

/// Coverage windows and embargoes for a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDetails {
    pub coverage_in_use: Code,
    pub global_date_coverage_parameters: Vec<DateCoverageParameters>,
    pub local_date_coverage_parameters: Vec<DateCoverageParameters>,
    pub perpetual_date_coverage_parameters: Vec<DateCoverageParameters>,
    pub global_embargo_information: EmbargoInformation,
    pub local_embargo_information: EmbargoInformation,
    pub perpetual_embargo_information: EmbargoInformation,
}

/// The provider interface a portfolio is delivered through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInterface {
    pub name: String,
    pub vendor: LinkedCode,
}

/// A portfolio record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub link: String,
    #[serde(default)]
    pub is_standalone: Option<bool>,
    pub resource_metadata: PortfolioResourceMetadata,
    #[serde(default)]
    pub electronic_collection: Option<ElectronicCollection>,
    pub availability: CodeDesc,
    #[serde(default)]
    pub material_type: Option<Code>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub activation_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date_z_opt")]
    pub expected_activation_date: Option<NaiveDate>,
    #[serde(default)]
    pub library: Option<Code>,
    #[serde(default)]
    pub access_type: Option<Code>,
    #[serde(default)]
    pub counter_platform: Option<Code>,
    #[serde(default)]
    pub linking_details: Option<LinkingDetails>,
    #[serde(default)]
    pub coverage_details: Option<CoverageDetails>,
    #[serde(default)]
    pub po_line: Option<Code>,
    #[serde(default)]
    pub public_access_model: Option<Code>,
    #[serde(rename = "license", default)]
    pub license: Option<Code>,
    #[serde(default)]
    pub interface: Option<PortfolioInterface>,
    #[serde(default)]
    pub pda: Option<Code>,
    #[serde(default)]
    pub number: Option<Vec<LinkedCode>>,
    #[serde(default)]
    pub authentication_note: Option<String>,
    #[serde(default)]
    pub public_note: Option<String>,
    #[serde(default)]
    pub internal_description: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<ResourceNote>>,
    #[serde(default)]
    pub group_settings: Option<Vec<GroupSetting>>,
}

/// A page or merged collection of portfolios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolios {
    #[serde(default)]
    pub total_record_count: Option<u64>,
    #[serde(rename = "portfolio")]
    pub portfolios: Vec<Portfolio>,
}
