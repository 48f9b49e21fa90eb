//! API data models
//!
//! This module contains data structures mirroring the Campaign Standard
//! JSON representations. Servers add fields without notice, so every model
//! tolerates unknown fields (collected into `extra` maps where callers may
//! need them, for custom-resource extensions in particular).

pub mod metadata;
pub mod privacy;
pub mod profile;
pub mod service;
pub mod transactional;
pub mod workflow;

use serde::{Deserialize, Serialize};

/// Hypermedia link as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
}

/// Lazy record count attached to collection responses. The value is only
/// present when the server chose to compute it; `href` points at the count
/// resource otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Count {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

/// Collection response wrapper.
///
/// Paging metadata is exposed raw; this crate never follows `next` links
/// itself — callers that want more pages issue the follow-up call.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,

    #[serde(rename = "serverSidePagination", default)]
    pub server_side_pagination: bool,

    /// Link to the next page, when the server reports one
    #[serde(default)]
    pub next: Option<Link>,
}
