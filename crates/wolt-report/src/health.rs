//! Site liveness probes
//!
//! A site is up when a HEAD request answers with a status below 400 inside
//! the request timeout. Probe failures mark the site down with the reason;
//! they never abort the report.

use std::sync::Arc;

use wolt_core::{Fetcher, SiteCheck};

/// Outcome of probing one site.
#[derive(Debug, Clone)]
pub struct SiteStatus {
    /// Display name from the configuration.
    pub name: String,
    /// HTTP status code, when the probe got an answer.
    pub status: Option<u16>,
    /// Probe failure description, when it did not.
    pub error: Option<String>,
}

impl SiteStatus {
    /// Up means an answer with a status below 400.
    pub fn is_up(&self) -> bool {
        matches!(self.status, Some(code) if code < 400)
    }
}

/// Probe every configured site with a HEAD request.
pub async fn probe_sites(fetcher: &Arc<dyn Fetcher>, sites: &[SiteCheck]) -> Vec<SiteStatus> {
    let mut statuses = Vec::with_capacity(sites.len());
    for site in sites {
        let status = match fetcher.head(&site.url).await {
            Ok(code) => SiteStatus {
                name: site.name.clone(),
                status: Some(code),
                error: None,
            },
            Err(e) => {
                tracing::warn!(site = %site.name, "health probe failed: {e}");
                SiteStatus {
                    name: site.name.clone(),
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        };
        statuses.push(status);
    }
    statuses
}
