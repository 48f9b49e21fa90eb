//! Resource metadata models
//!
//! Models for `profileAndServices/resourceType`, which describes the
//! schema of a (possibly customized) resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema description of one resource type.
///
/// The per-field `content` map keeps the server's own representation:
/// field entries differ wildly between standard and custom resources, so
/// only the envelope is typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Field descriptors keyed by field name
    #[serde(default)]
    pub content: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_keeps_field_descriptors() {
        let metadata: Metadata = serde_json::from_value(json!({
            "PKey": "@meta-profile",
            "name": "profile",
            "label": "Profiles",
            "content": {
                "email": {"type": "string", "length": 255},
                "cusLoyaltyTier": {"type": "string"}
            }
        }))
        .unwrap();
        assert_eq!(metadata.name, "profile");
        assert_eq!(metadata.content["email"]["length"], json!(255));
    }
}
