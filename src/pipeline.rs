//! Per-site orchestration: discover, aggregate, extract, record.

use crate::aggregate::aggregate;
use crate::config::PipelineConfig;
use crate::dataset::{Dataset, SiteOutcome};
use crate::discovery::{DiscoveryError, discover_links};
use crate::fetcher::Fetcher;
use crate::llm::Completion;
use crate::profile;
use crate::relevance::Keywords;
use tracing::{info, instrument, warn};

/// Everything a run needs, borrowed for its duration.
pub struct PipelineContext<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub completion: &'a dyn Completion,
    pub keywords: &'a Keywords,
    pub config: &'a PipelineConfig,
}

/// Process one site to its terminal outcome. Never fails: a blocked or
/// unreachable seed yields [`SiteOutcome::Unavailable`].
#[instrument(skip(ctx))]
pub async fn process_site(site: &str, ctx: &PipelineContext<'_>) -> SiteOutcome {
    info!("Processing: {}", site);

    let links = match discover_links(site, ctx.keywords, ctx.fetcher).await {
        Ok(links) => links,
        Err(DiscoveryError::Blocked { status }) => {
            warn!(status, "{} is blocked. Skipping...", site);
            return SiteOutcome::Unavailable;
        }
        Err(DiscoveryError::FetchFailed(e)) => {
            warn!("{} could not be fetched ({}). Skipping...", site, e);
            return SiteOutcome::Unavailable;
        }
    };

    if links.is_empty() {
        warn!("no relevant links found for {}", site);
    }

    let corpus = aggregate(&links, ctx.fetcher).await;
    let details = profile::extract(&corpus, site, ctx.completion, ctx.config.failure_style).await;

    SiteOutcome::Extracted(details)
}

/// Process `sites` strictly one after another, pausing
/// `inter_site_delay` after each. Rows come out in input order.
pub async fn run<S: AsRef<str>>(sites: &[S], ctx: &PipelineContext<'_>) -> Dataset {
    let mut dataset = Dataset::new();

    for site in sites {
        let site = site.as_ref();
        let outcome = process_site(site, ctx).await;
        let row = dataset.record(site, outcome);
        info!(fields = row.keys().count(), "recorded {}", row.website());

        if !ctx.config.inter_site_delay.is_zero() {
            tokio::time::sleep(ctx.config.inter_site_delay).await;
        }
    }

    info!(sites = dataset.len(), "run complete");
    dataset
}
