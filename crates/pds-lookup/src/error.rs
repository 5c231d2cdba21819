//! Error types for the pds-lookup CLI

use std::fmt;

use atproto_pds_resolver::IdentityError;

#[derive(Debug)]
pub enum LookupError {
    Identity(IdentityError),
    Config(String),
    Output(String),
    Failed(usize),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Identity(err) => write!(f, "Identity error: {}", err),
            LookupError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LookupError::Output(msg) => write!(f, "Output error: {}", msg),
            LookupError::Failed(count) => write!(f, "{} lookup(s) failed", count),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Identity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IdentityError> for LookupError {
    fn from(err: IdentityError) -> Self {
        LookupError::Identity(err)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Output(err.to_string())
    }
}

impl From<tracing_subscriber::filter::ParseError> for LookupError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        LookupError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
