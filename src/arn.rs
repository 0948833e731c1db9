//! Distribution id extraction from CloudFront ARNs.
//!
//! Expected shape: `arn:aws:cloudfront::<account-id>:distribution/<distribution-id>`

use crate::types::{DistributionId, ReportError};

/// Take the segment after the last `/` as the distribution id
pub fn distribution_id(arn: &str) -> Result<DistributionId, ReportError> {
    // An empty id after a trailing `/` is malformed too, rather than a failed fetch
    match arn.rsplit_once('/') {
        Some((_, id)) if !id.is_empty() => Ok(DistributionId::new(id)),
        _ => Err(ReportError::MalformedArn(arn.to_string())),
    }
}
