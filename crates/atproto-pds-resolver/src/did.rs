//! DID strings and method dispatch

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IdentityError, Result};

/// A decentralized identifier such as `did:plc:abc123` or `did:web:example.com`
///
/// The string is kept verbatim. Only `did:web` DIDs are inspected locally;
/// everything else is handed to the directory as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    pub fn new(did: impl Into<String>) -> Self {
        Self(did.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Determine how this DID's document is fetched
    pub fn method(&self) -> Result<DidMethod> {
        DidMethod::of(&self.0)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Did {
    fn from(did: String) -> Self {
        Self(did)
    }
}

impl From<&str> for Did {
    fn from(did: &str) -> Self {
        Self(did.to_string())
    }
}

/// Document-fetch strategy for a DID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DidMethod {
    /// `did:web:<host>`, served from `<host>/.well-known/did.json`
    Web { host: String },
    /// Any other method, looked up in the PLC directory
    Directory,
}

impl DidMethod {
    /// Classify a DID string.
    ///
    /// The host of a `did:web` DID is its third colon-delimited segment, with
    /// an encoded port (`%3A`) decoded. A `did:web` DID with no host is an
    /// error; no other method is validated. Dispatch is on the exact method
    /// segment, not a `did:web` string prefix, so `did:webvh:...` is a
    /// directory DID.
    pub fn of(did: &str) -> Result<Self> {
        let mut segments = did.split(':');
        match (segments.next(), segments.next()) {
            (Some("did"), Some("web")) => {
                let host = segments
                    .next()
                    .filter(|host| !host.is_empty())
                    .ok_or_else(|| IdentityError::InvalidDid(did.to_string()))?;
                Ok(DidMethod::Web {
                    host: host.replace("%3A", ":"),
                })
            }
            _ => Ok(DidMethod::Directory),
        }
    }
}
