//! Request option marshalling
//!
//! Builds the authorization and server-variable envelope consumed by the
//! transport for every outbound Campaign Standard call. The field names in
//! the serialized form are fixed by the downstream API contract and must
//! match it exactly for authentication to succeed.

use serde::Serialize;
use serde_json::{Map, Value};

/// Inputs for [`create_request_options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsParams {
    /// Tenant (organization) identifier, e.g. `"testtenant"`
    pub tenant_id: String,

    /// Adobe I/O API key
    pub api_key: String,

    /// IMS bearer token
    pub access_token: String,

    /// Request payload; defaults to an empty JSON object when absent
    pub body: Option<Value>,
}

/// Per-call request envelope: payload plus security schemes plus server
/// routing variables. Built fresh for each call and consumed immediately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestOptions {
    #[serde(rename = "requestBody")]
    pub request_body: Value,
    pub securities: Securities,
    #[serde(rename = "serverVariables")]
    pub server_variables: ServerVariables,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Securities {
    pub authorized: Authorized,
}

/// The two security schemes every Campaign Standard call carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Authorized {
    #[serde(rename = "BearerAuth")]
    pub bearer_auth: SecurityValue,
    #[serde(rename = "ApiKeyAuth")]
    pub api_key_auth: SecurityValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityValue {
    pub value: String,
}

/// Server URL template variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerVariables {
    #[serde(rename = "ORGANIZATION")]
    pub organization: String,
}

impl RequestOptions {
    /// Bearer token attached as `Authorization: Bearer <token>`.
    pub fn bearer_token(&self) -> &str {
        &self.securities.authorized.bearer_auth.value
    }

    /// API key attached as the `X-Api-Key` header.
    pub fn api_key(&self) -> &str {
        &self.securities.authorized.api_key_auth.value
    }

    /// Organization substituted into the server URL template.
    pub fn organization(&self) -> &str {
        &self.server_variables.organization
    }
}

/// Assemble the request envelope for one outbound call.
///
/// Pure function: no I/O, no validation — empty or malformed credentials
/// pass through unchanged and fail later at the server, not here.
pub fn create_request_options(params: OptionsParams) -> RequestOptions {
    RequestOptions {
        request_body: params.body.unwrap_or_else(|| Value::Object(Map::new())),
        securities: Securities {
            authorized: Authorized {
                bearer_auth: SecurityValue {
                    value: params.access_token,
                },
                api_key_auth: SecurityValue {
                    value: params.api_key,
                },
            },
        },
        server_variables: ServerVariables {
            organization: params.tenant_id,
        },
    }
}
