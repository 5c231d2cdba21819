//! AT Protocol PDS Resolver
//!
//! Resolves handles to DIDs (via `com.atproto.identity.resolveHandle`) and
//! DIDs to their Personal Data Server endpoint. Supports did:web (via the
//! host's `/.well-known/did.json`) and every other method via plc.directory.
//! PDS lookups are cached per DID using a moka async cache.

mod cache;
mod did;
mod error;
mod resolver;
mod types;

pub use cache::{CachePolicy, CachedPds, DidCache};
pub use did::{Did, DidMethod};
pub use error::{IdentityError, Result};
pub use resolver::{IdentityResolver, ResolverConfig};
pub use types::{
    DidDocument, DidService, ResolveResult, VerificationMethod, ATPROTO_PDS_SERVICE_ID,
};
