//! Stack SAN Domain Report Library
//!
//! Lists the alternate domain names (SANs) of every CloudFront distribution
//! tagged `stack-name=<stack>`, using the ambient AWS credential chain.
//!
//! ## Flow
//!
//! 1. `session` resolves credentials and region
//! 2. `tagging` discovers the stack's distributions
//! 3. `arn` extracts each distribution id
//! 4. `cloudfront` fetches the alias list per distribution
//! 5. `report` writes the listing and the grand total
//!
//! `orchestrator` ties the steps together behind the `ResourceDiscoverer`
//! and `DistributionInspector` traits so they can be swapped in tests.

pub mod arn;
pub mod cloudfront;
pub mod orchestrator;
pub mod report;
pub mod session;
pub mod tagging;
pub mod types;

pub use cloudfront::{CloudFrontClient, DistributionInspector};
pub use orchestrator::{report_for_stack, SanDomainReport};
pub use session::{AmbientSession, SessionProvider};
pub use tagging::{ResourceDiscoverer, TaggingClient};
pub use types::{
    DistributionId, ReportError, ResourceRecord, RunOutcome, RunSummary, StackName, TagQuery,
};
