//! Per-DID cache of PDS endpoints and DID documents
//!
//! The endpoint and the document are stored as one entry, so a DID is either
//! fully cached or not cached at all. Without a policy the cache is unbounded
//! and entries never expire.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::did::Did;
use crate::types::DidDocument;

/// Optional bounds on the cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_capacity: Option<u64>,
    pub time_to_live: Option<Duration>,
}

/// A cached PDS resolution
#[derive(Debug, Clone)]
pub struct CachedPds {
    pub endpoint: String,
    pub document: Arc<DidDocument>,
}

/// Thread-safe cache shared by clones
#[derive(Clone)]
pub struct DidCache {
    entries: Cache<Did, CachedPds>,
}

impl DidCache {
    /// Create an unbounded, non-expiring cache
    pub fn new() -> Self {
        Self::with_policy(CachePolicy::default())
    }

    pub fn with_policy(policy: CachePolicy) -> Self {
        let mut builder = Cache::<Did, CachedPds>::builder();
        if let Some(max_capacity) = policy.max_capacity {
            builder = builder.max_capacity(max_capacity);
        }
        if let Some(ttl) = policy.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            entries: builder.build(),
        }
    }

    pub async fn get(&self, did: &Did) -> Option<CachedPds> {
        self.entries.get(did).await
    }

    pub async fn pds_endpoint(&self, did: &Did) -> Option<String> {
        self.get(did).await.map(|cached| cached.endpoint)
    }

    pub async fn document(&self, did: &Did) -> Option<Arc<DidDocument>> {
        self.get(did).await.map(|cached| cached.document)
    }

    pub fn contains(&self, did: &Did) -> bool {
        self.entries.contains_key(did)
    }

    /// Store an endpoint together with the document it came from
    pub async fn insert(&self, did: Did, endpoint: String, document: Arc<DidDocument>) {
        self.entries
            .insert(did, CachedPds { endpoint, document })
            .await;
    }

    pub async fn invalidate(&self, did: &Did) {
        self.entries.invalidate(did).await;
    }

    /// Number of cached DIDs, after flushing pending maintenance
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

impl Default for DidCache {
    fn default() -> Self {
        Self::new()
    }
}
