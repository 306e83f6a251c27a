//! HTTP client for the filters endpoint.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use rpt_model::FiltersData;

use crate::config::ClientSettings;
use crate::envelope::ApiEnvelope;
use crate::error::{FetchError, Result};

const JSON: &str = "application/json";

/// Fetches filter options from the report API.
#[derive(Debug, Clone)]
pub struct FiltersService {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl FiltersService {
    /// Creates a client for the endpoint described by `settings`.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let raw = settings.filters_url();
        let url = reqwest::Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, url })
    }

    /// The endpoint this client queries.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetches the available filter options.
    ///
    /// Failures are logged here and then returned to the caller.
    pub async fn get_filters(&self) -> Result<FiltersData> {
        let result = self.fetch().await;

        match &result {
            Ok(data) => tracing::debug!(categories = data.len(), "Fetched filters"),
            Err(err) => tracing::error!(url = %self.url, error = %err, "Error fetching filters"),
        }

        result
    }

    async fn fetch(&self) -> Result<FiltersData> {
        tracing::debug!("Fetching filters from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }

        let envelope: ApiEnvelope = response.json().await?;
        envelope.into_filters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let service = FiltersService::new(&ClientSettings::default()).unwrap();
        assert_eq!(service.url(), "http://localhost:5173/api/report/filters");
    }

    #[test]
    fn test_relative_base_url_rejected() {
        // Unlike a browser, there is no page origin to resolve "/api" against
        let result = FiltersService::new(&ClientSettings::with_base_url("/api"));
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
