//! Resource Groups Tagging API discovery
//!
//! Finds the resources of one type that carry a given tag.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_resourcegroupstagging::types::{ResourceTagMapping, TagFilter};
use aws_sdk_resourcegroupstagging::Client;
use tracing::debug;

use crate::types::{sdk_error_message, ReportError, ResourceRecord, TagQuery};

/// Tag-based resource discovery
#[async_trait]
pub trait ResourceDiscoverer: Send + Sync {
    /// Return the resources matching `query`, in service order
    async fn discover(&self, query: &TagQuery) -> Result<Vec<ResourceRecord>, ReportError>;
}

/// Discovery backed by `tag:GetResources`
pub struct TaggingClient {
    client: Client,
}

impl TaggingClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ResourceDiscoverer for TaggingClient {
    async fn discover(&self, query: &TagQuery) -> Result<Vec<ResourceRecord>, ReportError> {
        let filter = TagFilter::builder()
            .key(&query.tag_key)
            .values(&query.tag_value)
            .build();

        // Single page only
        let output = self
            .client
            .get_resources()
            .tag_filters(filter)
            .resource_type_filters(&query.resource_type)
            .send()
            .await
            .map_err(|e| ReportError::Discovery(sdk_error_message(&e)))?;

        if let Some(token) = output.pagination_token().filter(|t| !t.is_empty()) {
            debug!(
                pagination_token = %token,
                "More resources available; only the first page is reported"
            );
        }

        Ok(records_from(output.resource_tag_mapping_list()))
    }
}

fn records_from(mappings: &[ResourceTagMapping]) -> Vec<ResourceRecord> {
    mappings
        .iter()
        .map(|mapping| ResourceRecord {
            arn: mapping.resource_arn().map(str::to_string),
        })
        .collect()
}
