//! SAN Domain Report Types
//!
//! Core values passed between discovery, inspection and reporting.

use std::fmt;

use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

/// Tag key every stack-owned resource carries
pub const STACK_TAG_KEY: &str = "stack-name";

/// Resource type filter for CloudFront distributions
pub const DISTRIBUTION_RESOURCE_TYPE: &str = "cloudfront:distribution";

/// Stack name used as the tag filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackName(String);

impl StackName {
    /// Create a stack name, rejecting empty input
    pub fn new(value: impl Into<String>) -> Result<Self, ReportError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ReportError::InvalidStackName(
                "stack name must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag filter for a single discovery query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub tag_key: String,
    pub tag_value: String,
    pub resource_type: String,
}

impl TagQuery {
    /// Query for the CloudFront distributions owned by a stack
    pub fn distributions_for(stack: &StackName) -> Self {
        Self {
            tag_key: STACK_TAG_KEY.to_string(),
            tag_value: stack.as_str().to_string(),
            resource_type: DISTRIBUTION_RESOURCE_TYPE.to_string(),
        }
    }
}

/// One tagged resource returned by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Resource ARN; the tagging service may omit it
    pub arn: Option<String>,
}

impl ResourceRecord {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: Some(arn.into()),
        }
    }

    /// A record the service returned without an ARN
    pub fn without_arn() -> Self {
        Self { arn: None }
    }
}

/// Short CloudFront distribution id, e.g. `E2QWRUHAPOMQZL`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistributionId(String);

impl DistributionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Discovery matched nothing; no summary was printed
    NoResources,
    /// At least one resource was discovered and the summary was printed
    Completed(RunSummary),
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Resources returned by discovery
    pub discovered: usize,
    /// Distributions whose configuration was fetched and reported
    pub reported: usize,
    /// Records skipped (no ARN, malformed ARN or failed fetch)
    pub skipped: usize,
    /// SAN domains across all reported distributions
    pub total_domains: usize,
}

/// Errors that can occur while building the report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Stack name missing or empty
    #[error("Invalid stack name: {0}")]
    InvalidStackName(String),

    /// Credentials or region could not be resolved
    #[error("Failed to load AWS session: {0}")]
    Session(String),

    /// Tag-based discovery failed
    #[error("Failed to get resources by tag: {0}")]
    Discovery(String),

    /// ARN has no distribution id segment
    #[error("Unexpected ARN format: {0}")]
    MalformedArn(String),

    /// Configuration fetch for one distribution failed
    #[error("Failed to get configuration for distribution {distribution_id}: {message}")]
    DistributionFetch {
        distribution_id: DistributionId,
        message: String,
    },

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Render an SDK error with its full source chain
pub(crate) fn sdk_error_message<E: std::error::Error>(err: &E) -> String {
    DisplayErrorContext(err).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_name_rejects_empty() {
        let err = StackName::new("").unwrap_err();
        assert!(matches!(err, ReportError::InvalidStackName(_)));
    }

    #[test]
    fn test_stack_name_is_verbatim() {
        let stack = StackName::new(" prod ").unwrap();
        assert_eq!(stack.as_str(), " prod ");
    }

    #[test]
    fn test_tag_query_for_distributions() {
        let stack = StackName::new("prod").unwrap();
        let query = TagQuery::distributions_for(&stack);

        assert_eq!(query.tag_key, "stack-name");
        assert_eq!(query.tag_value, "prod");
        assert_eq!(query.resource_type, "cloudfront:distribution");
    }

    #[test]
    fn test_fetch_error_names_distribution() {
        let err = ReportError::DistributionFetch {
            distribution_id: DistributionId::new("E123"),
            message: "AccessDenied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to get configuration for distribution E123: AccessDenied"
        );
    }
}
