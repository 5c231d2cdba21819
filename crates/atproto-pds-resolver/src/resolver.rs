use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{CachePolicy, DidCache};
use crate::did::{Did, DidMethod};
use crate::error::{IdentityError, Result};
use crate::types::{DidDocument, ResolveHandleResponse, ResolveResult};

const DEFAULT_SERVICE_URL: &str = "https://public.api.bsky.app";
const DEFAULT_PLC_DIRECTORY_URL: &str = "https://plc.directory";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolver settings
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// XRPC service answering `com.atproto.identity.resolveHandle`
    pub service_url: String,
    /// PLC directory used for every DID method except `did:web`
    pub plc_directory_url: String,
    /// Scheme of `did:web` document URLs
    pub web_did_scheme: String,
    pub timeout: Duration,
    pub cache: CachePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            plc_directory_url: DEFAULT_PLC_DIRECTORY_URL.to_string(),
            web_did_scheme: "https".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache: CachePolicy::default(),
        }
    }
}

/// Resolves handles to DIDs and DIDs to their PDS endpoint
///
/// PDS lookups are memoized per DID in a [`DidCache`] owned by the resolver.
/// Concurrent misses for the same DID are not coalesced; each one fetches the
/// document and the last write wins.
pub struct IdentityResolver {
    client: Client,
    config: ResolverConfig,
    cache: DidCache,
}

impl IdentityResolver {
    /// Create a resolver against the public Bluesky and PLC services
    pub fn new() -> Result<Self> {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        let cache = DidCache::with_policy(config.cache);
        Self::with_cache(config, cache)
    }

    /// Create a resolver that shares an existing cache
    pub fn with_cache(config: ResolverConfig, cache: DidCache) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn cache(&self) -> &DidCache {
        &self.cache
    }

    /// Resolve a handle to a DID
    ///
    /// The handle is not validated locally; malformed handles are rejected by
    /// the remote service. Nothing is cached.
    pub async fn resolve_handle(&self, handle: &str) -> Result<Did> {
        let url = format!(
            "{}/xrpc/com.atproto.identity.resolveHandle?handle={}",
            self.config.service_url.trim_end_matches('/'),
            urlencoding::encode(handle)
        );
        debug!(handle, url = %url, "Resolving handle");

        let data: ResolveHandleResponse = self.fetch_json(&url).await?;

        debug!(handle, did = %data.did, "Resolved handle");
        Ok(data.did)
    }

    /// Get the PDS endpoint for a DID
    ///
    /// Returns `Ok(None)` when the DID document has no `#atproto_pds` service;
    /// in that case nothing is cached.
    pub async fn get_pds(&self, did: &Did) -> Result<Option<String>> {
        if let Some(endpoint) = self.cache.pds_endpoint(did).await {
            debug!(did = %did, "PDS cache hit");
            return Ok(Some(endpoint));
        }

        let url = self.did_document_url(did)?;
        debug!(did = %did, url = %url, "Fetching DID document");

        let doc: DidDocument = self.fetch_json(&url).await?;

        let Some(endpoint) = doc.pds_endpoint().map(str::to_string) else {
            debug!(did = %did, "No PDS service found in DID document");
            return Ok(None);
        };

        self.cache
            .insert(did.clone(), endpoint.clone(), Arc::new(doc))
            .await;

        debug!(did = %did, pds_url = %endpoint, "Resolved PDS URL");
        Ok(Some(endpoint))
    }

    /// Cached DID document from an earlier successful [`get_pds`](Self::get_pds)
    pub async fn get_did_document(&self, did: &Did) -> Option<Arc<DidDocument>> {
        self.cache.document(did).await
    }

    /// Resolve a handle all the way to its PDS
    pub async fn resolve(&self, handle: &str) -> Result<ResolveResult> {
        let did = self.resolve_handle(handle).await?;
        let pds_endpoint = self.get_pds(&did).await?;

        Ok(ResolveResult {
            did,
            handle: Some(handle.to_string()),
            pds_endpoint,
        })
    }

    /// Resolve either a handle or a DID (anything starting with `did:`)
    ///
    /// For a DID the handle is taken from the document's `at://` alias.
    pub async fn resolve_identifier(&self, identifier: &str) -> Result<ResolveResult> {
        if !identifier.starts_with("did:") {
            return self.resolve(identifier).await;
        }

        let did = Did::new(identifier);
        let pds_endpoint = self.get_pds(&did).await?;
        let handle = self
            .get_did_document(&did)
            .await
            .and_then(|doc| doc.handle().map(str::to_string));

        Ok(ResolveResult {
            did,
            handle,
            pds_endpoint,
        })
    }

    /// URL of the DID document for a DID
    pub fn did_document_url(&self, did: &Did) -> Result<String> {
        match did.method()? {
            DidMethod::Web { host } => Ok(format!(
                "{}://{}/.well-known/did.json",
                self.config.web_did_scheme, host
            )),
            DidMethod::Directory => Ok(format!(
                "{}/{}",
                self.config.plc_directory_url.trim_end_matches('/'),
                did
            )),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(IdentityError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
