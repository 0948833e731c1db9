//! SAN Domain Report Orchestrator
//!
//! Runs the report end to end: discover the stack's distributions, extract
//! their ids, fetch each configuration and write the listing.
//!
//! Discovery failures abort the run. Everything inside the per-resource loop
//! is logged and skipped so one bad distribution cannot sink the report.

use std::io::Write;

use aws_config::SdkConfig;
use tracing::{info, warn};

use crate::arn;
use crate::cloudfront::DistributionInspector;
use crate::report::Reporter;
use crate::session::SessionProvider;
use crate::tagging::ResourceDiscoverer;
use crate::types::{ReportError, RunOutcome, RunSummary, StackName, TagQuery};

/// Builds the SAN domain report for one stack
pub struct SanDomainReport<D, I> {
    discoverer: D,
    inspector: I,
}

impl<D, I> SanDomainReport<D, I>
where
    D: ResourceDiscoverer,
    I: DistributionInspector,
{
    pub fn new(discoverer: D, inspector: I) -> Self {
        Self {
            discoverer,
            inspector,
        }
    }

    /// Run the report for `stack`, writing it to `out`
    pub async fn run<W: Write>(
        &self,
        stack: &StackName,
        out: W,
    ) -> Result<RunOutcome, ReportError> {
        let query = TagQuery::distributions_for(stack);

        info!(
            "Sending GetResources request to fetch resources with tag {}={}",
            query.tag_key, query.tag_value
        );
        let records = self.discoverer.discover(&query).await?;

        let mut reporter = Reporter::new(out);

        if records.is_empty() {
            reporter.no_resources()?;
            return Ok(RunOutcome::NoResources);
        }

        info!(
            "Found {} distributions for {}={}",
            records.len(),
            query.tag_key,
            query.tag_value
        );

        let mut summary = RunSummary {
            discovered: records.len(),
            ..Default::default()
        };

        for record in &records {
            let Some(resource_arn) = record.arn.as_deref() else {
                summary.skipped += 1;
                continue;
            };

            let distribution_id = match arn::distribution_id(resource_arn) {
                Ok(id) => id,
                Err(e) => {
                    warn!("{}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            info!(
                "Processing CloudFront distribution: {} (ARN: {})",
                distribution_id, resource_arn
            );

            let aliases = match self.inspector.aliases(&distribution_id).await {
                Ok(aliases) => aliases,
                Err(e) => {
                    warn!(distribution_id = %distribution_id, "{}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            reporter.distribution(&distribution_id, &aliases)?;
            summary.reported += 1;
        }

        summary.total_domains = reporter.finish()?;
        Ok(RunOutcome::Completed(summary))
    }
}

/// Load a session, build the query clients from it and run the report.
///
/// `connect` is only called once the session has loaded, so a bootstrap
/// failure never reaches either remote API.
pub async fn report_for_stack<S, F, D, I, W>(
    session: &S,
    connect: F,
    stack: &StackName,
    out: W,
) -> Result<RunOutcome, ReportError>
where
    S: SessionProvider,
    F: FnOnce(&SdkConfig) -> (D, I),
    D: ResourceDiscoverer,
    I: DistributionInspector,
    W: Write,
{
    let config = session.load().await?;
    let (discoverer, inspector) = connect(&config);

    SanDomainReport::new(discoverer, inspector)
        .run(stack, out)
        .await
}
