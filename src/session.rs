//! AWS Session Resolution
//!
//! Resolves credentials and region from the ambient environment.
//! No hardcoded credentials - resolution is handled by the default chain:
//! - Local: `AWS_PROFILE` / `~/.aws/config` / `AWS_ACCESS_KEY_ID`
//! - EC2/ECS: instance or task role via metadata endpoints
//! - CI: web identity token

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tracing::debug;

use crate::types::{sdk_error_message, ReportError};

/// Source of a usable AWS session handle
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Load a session, failing if credentials or region are unavailable
    async fn load(&self) -> Result<SdkConfig, ReportError>;
}

/// Session from the default AWS provider chain
#[derive(Debug, Default, Clone, Copy)]
pub struct AmbientSession;

#[async_trait]
impl SessionProvider for AmbientSession {
    async fn load(&self) -> Result<SdkConfig, ReportError> {
        debug!("Loading AWS configuration from the default provider chain");

        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        verify(&config).await?;

        Ok(config)
    }
}

/// Check that a session has a region and resolvable credentials
pub async fn verify(config: &SdkConfig) -> Result<(), ReportError> {
    let region = config.region().ok_or_else(|| {
        ReportError::Session(
            "no AWS region configured (set AWS_REGION or a profile region)".to_string(),
        )
    })?;

    let provider = config
        .credentials_provider()
        .ok_or_else(|| ReportError::Session("no AWS credentials provider configured".to_string()))?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| ReportError::Session(sdk_error_message(&e)))?;

    debug!(region = %region, "AWS session resolved");
    Ok(())
}
