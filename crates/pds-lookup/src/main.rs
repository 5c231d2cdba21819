//! pds-lookup - resolve AT Protocol handles and DIDs to their PDS
//!
//! Each identifier is either a handle (resolved to a DID first) or a DID.

mod config;
mod error;

use atproto_pds_resolver::{IdentityResolver, ResolveResult};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::{LookupError, Result};

#[derive(Debug, Parser)]
#[command(name = "pds-lookup", version, about = "Resolve AT Protocol handles and DIDs to their PDS")]
struct Args {
    /// Handles or DIDs to resolve
    #[arg(required = true)]
    identifiers: Vec<String>,

    /// Print one JSON object per identifier
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("pds_lookup=info".parse()?)
        .add_directive("atproto_pds_resolver=info".parse()?);

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    let resolver = IdentityResolver::with_config(config.resolver_config())?;
    info!(
        service_url = %resolver.config().service_url,
        plc_directory_url = %resolver.config().plc_directory_url,
        "Resolving {} identifier(s)",
        args.identifiers.len()
    );

    let mut failures = 0;
    for identifier in &args.identifiers {
        match resolver.resolve_identifier(identifier).await {
            Ok(result) => {
                if result.pds_endpoint.is_none() {
                    warn!(identifier = %identifier, did = %result.did, "No PDS service found");
                }
                let line = if args.json {
                    serde_json::to_string(&result)?
                } else {
                    format_result(&result)
                };
                println!("{line}");
            }
            Err(e) => {
                error!(identifier = %identifier, "Lookup failed: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(LookupError::Failed(failures));
    }

    Ok(())
}

fn format_result(result: &ResolveResult) -> String {
    format!(
        "did: {}\nhandle: {}\npds: {}",
        result.did,
        result.handle.as_deref().unwrap_or("-"),
        result.pds_endpoint.as_deref().unwrap_or("-")
    )
}
