use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::did::Did;

/// Service id of the PDS entry in a DID document
pub const ATPROTO_PDS_SERVICE_ID: &str = "#atproto_pds";

/// DID Document
///
/// Only `id`, `alsoKnownAs` and the service ids are relied on. Fields that DID
/// Core lets take several shapes (`@context`, `serviceEndpoint`, service
/// `type`) are kept as raw JSON so an unusual entry elsewhere in the document
/// does not hide the PDS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    #[serde(rename = "@context", default, skip_serializing_if = "Value::is_null")]
    pub context: Value,
    pub id: Did,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub verification_method: Vec<VerificationMethod>,
    #[serde(default)]
    pub service: Vec<DidService>,
}

impl DidDocument {
    /// Endpoint of the first `#atproto_pds` service
    pub fn pds_endpoint(&self) -> Option<&str> {
        self.service
            .iter()
            .find(|s| s.id == ATPROTO_PDS_SERVICE_ID)
            .and_then(|s| s.service_endpoint.as_str())
    }

    /// Handle from the first `at://` alias
    pub fn handle(&self) -> Option<&str> {
        self.also_known_as
            .iter()
            .find_map(|aka| aka.strip_prefix("at://"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidService {
    pub id: String,
    #[serde(default)]
    pub r#type: Value,
    pub service_endpoint: Value,
}

/// Result of resolving a handle through to its PDS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResult {
    pub did: Did,
    pub handle: Option<String>,
    pub pds_endpoint: Option<String>,
}

/// `com.atproto.identity.resolveHandle` response
#[derive(Debug, Deserialize)]
pub(crate) struct ResolveHandleResponse {
    pub(crate) did: Did,
}
