//! Genome Nexus HTTP client

use std::time::Duration;

use super::AnnotationSource;
use crate::annotation::genome_nexus::VariantAnnotation;
use crate::annotation::AnnotationRecord;
use crate::config::ApiConfig;
use crate::error::NexusError;

/// Client for the Genome Nexus annotation endpoint.
#[derive(Debug, Clone)]
pub struct GenomeNexusClient {
    client: reqwest::Client,
    base_url: String,
    fields: Vec<String>,
}

impl GenomeNexusClient {
    /// Create a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, NexusError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("ferro-nexus/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fields: config.fields.clone(),
        })
    }

    /// Service root without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for one variant.
    pub fn annotation_url(&self, variant: &str) -> String {
        format!(
            "{}/annotation/{}?fields={}",
            self.base_url,
            urlencoding::encode(variant),
            self.fields.join(",")
        )
    }

    /// Fetch the raw annotation response.
    pub async fn fetch_response(&self, variant: &str) -> Result<VariantAnnotation, NexusError> {
        let url = self.annotation_url(variant);
        tracing::debug!(%url, "requesting annotation");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NexusError::no_result(variant, format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NexusError::no_result(variant, "variant not found"));
        }
        if !status.is_success() {
            return Err(NexusError::no_result(variant, format!("HTTP {}", status)));
        }

        let body: VariantAnnotation = response
            .json()
            .await
            .map_err(|e| NexusError::no_result(variant, format!("undecodable response: {}", e)))?;

        if body.is_unannotated() {
            return Err(NexusError::no_result(variant, "variant could not be annotated"));
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl AnnotationSource for GenomeNexusClient {
    async fn fetch_annotation(&self, variant: &str) -> Result<AnnotationRecord, NexusError> {
        let mut response = self.fetch_response(variant).await?;
        if response.variant.is_empty() {
            response.variant = variant.to_string();
        }
        Ok(AnnotationRecord::from(response))
    }

    fn source_name(&self) -> &'static str {
        "genome-nexus"
    }
}
