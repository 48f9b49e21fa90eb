//! Adobe Campaign Standard REST API client
//!
//! Async client library for the Adobe Campaign Standard (ACS) REST API.
//! Credentials (tenant id, API key, IMS bearer token) are captured once in
//! a [`CampaignClient`]; every call marshals them into the request envelope
//! the API expects, logs request and response bodies at debug level, and
//! surfaces failures as [`CampaignError`] values that [`reduce_error`] can
//! collapse into short human-readable strings.
//!
//! # Example
//!
//! ```no_run
//! use campaign_standard::{CampaignClient, CampaignConfig, reduce_error};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CampaignConfig::new(
//!         "mytenant".into(),
//!         "my-api-key".into(),
//!         "my-access-token".into(),
//!     );
//!     let client = CampaignClient::new(config).expect("valid configuration");
//!
//!     match client.get_all_profiles().await {
//!         Ok(profiles) => println!("fetched {} profiles", profiles.content.len()),
//!         Err(e) => eprintln!("{}", reduce_error(e)),
//!     }
//! }
//! ```

pub mod api;
pub mod core;
pub mod models;

pub use crate::core::client::CampaignClient;
pub use crate::core::config::CampaignConfig;
pub use crate::core::error::{CampaignError, ErrorResponse, ReducedError, reduce_error};
pub use crate::core::interceptors::{
    DebugSink, RequestRecord, ResponseRecord, TracingSink, request_interceptor,
    response_interceptor,
};
pub use crate::core::logging::init_logging;
pub use crate::core::options::{OptionsParams, RequestOptions, create_request_options};
