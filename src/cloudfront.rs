//! CloudFront distribution inspection
//!
//! Fetches the alternate domain names (aliases) configured on a distribution.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudfront::types::Aliases;
use aws_sdk_cloudfront::Client;

use crate::types::{sdk_error_message, DistributionId, ReportError};

/// Per-distribution configuration lookup
#[async_trait]
pub trait DistributionInspector: Send + Sync {
    /// Alias domains of one distribution, in configured order.
    ///
    /// An absent alias list is returned as an empty vector.
    async fn aliases(&self, id: &DistributionId) -> Result<Vec<String>, ReportError>;
}

/// Inspector backed by `cloudfront:GetDistributionConfig`
pub struct CloudFrontClient {
    client: Client,
}

impl CloudFrontClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl DistributionInspector for CloudFrontClient {
    async fn aliases(&self, id: &DistributionId) -> Result<Vec<String>, ReportError> {
        let output = self
            .client
            .get_distribution_config()
            .id(id.as_str())
            .send()
            .await
            .map_err(|e| ReportError::DistributionFetch {
                distribution_id: id.clone(),
                message: sdk_error_message(&e),
            })?;

        let aliases = output
            .distribution_config()
            .and_then(|config| config.aliases());

        Ok(alias_domains(aliases))
    }
}

fn alias_domains(aliases: Option<&Aliases>) -> Vec<String> {
    aliases
        .map(|a| a.items().to_vec())
        .unwrap_or_default()
}
