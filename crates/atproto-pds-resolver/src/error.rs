//! Error types for handle and PDS resolution

use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum IdentityError {
    Http(Box<reqwest::Error>),
    Status { url: String, status: StatusCode },
    Json(serde_json::Error),
    InvalidDid(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Http(err) => write!(f, "HTTP error: {}", err),
            IdentityError::Status { url, status } => {
                write!(f, "{} returned status {}", url, status)
            }
            IdentityError::Json(err) => write!(f, "JSON parse error: {}", err),
            IdentityError::InvalidDid(did) => write!(f, "Invalid DID: {}", did),
        }
    }
}

impl std::error::Error for IdentityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdentityError::Http(err) => Some(err.as_ref()),
            IdentityError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        IdentityError::Http(Box::new(err))
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        IdentityError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
