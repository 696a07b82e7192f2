//! HTTP client for the remote style-transfer service.

use super::dependencies::StyleBackend;
use super::types::ExportError;
use crate::config::StyleTransferConfig;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for an HTTP style-transfer service.
///
/// The service is an opaque transform: it receives the rendered canvas at
/// `POST <endpoint>/stylize/<style-id>` and answers with the styled image
/// bytes, or a non-2xx status on failure. Nothing about the model behind
/// it is assumed here.
pub struct HttpStyleBackend {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpStyleBackend {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ExportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExportError::Backend(e.to_string()))?;
        Ok(Self { endpoint, http })
    }

    /// Builds the client from the `[style_transfer]` config section.
    pub fn from_config(config: &StyleTransferConfig) -> Result<Self, ExportError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            ExportError::Backend(format!("invalid endpoint '{}': {e}", config.endpoint))
        })?;
        Self::new(endpoint, Duration::from_secs(config.timeout_secs))
    }

    fn stylize_url(&self, style: &str) -> Result<Url, ExportError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ExportError::Backend("endpoint cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["stylize", style]);
        Ok(url)
    }
}

#[async_trait]
impl StyleBackend for HttpStyleBackend {
    async fn stylize(&self, image: &[u8], style: &str) -> Result<Vec<u8>, ExportError> {
        let url = self.stylize_url(style)?;
        log::info!(
            "Requesting style '{}' from {} ({} bytes)",
            style,
            url,
            image.len()
        );

        let response = self
            .http
            .post(url)
            .header("content-type", "image/svg+xml")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| ExportError::Backend(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExportError::Backend(e.to_string()))?;

        if !status.is_success() {
            let detail = String::from_utf8_lossy(&bytes[..bytes.len().min(200)]).to_string();
            return Err(ExportError::InvalidResponse(format!(
                "status {}: {}",
                status.as_u16(),
                detail
            )));
        }

        if bytes.is_empty() {
            return Err(ExportError::InvalidResponse(
                "empty response body".to_string(),
            ));
        }

        log::info!("Style service returned {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
