//! HTTP transport
//!
//! One bounded GET per call, API key and pagination window as query
//! parameters. Failed responses (status >= 400) come back already
//! classified as domain errors.

mod client;

pub use client::{
    ClientConfig, ClientConfigBuilder, HttpClient, ResponseFormat, DEFAULT_HOST,
    DEFAULT_URL_PREFIX, DEFAULT_VERSION,
};
