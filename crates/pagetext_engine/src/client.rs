use std::time::Duration;

use crate::{ExtractError, FailureKind};

/// Endpoints and timeout policy for the extraction proxy.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// CORS relay that forwards the request; the reader URL travels in its
    /// `url` query parameter, percent-encoded.
    pub relay_endpoint: String,
    /// Readability-extraction service; the target URL is appended to this
    /// prefix verbatim.
    pub reader_endpoint: String,
    /// Whole-request deadline, measured from request initiation.
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            relay_endpoint: "https://api.allorigins.win/raw".to_string(),
            reader_endpoint: "https://r.jina.ai/".to_string(),
            request_timeout: Duration::from_secs(45),
        }
    }
}

/// Extraction seam: fetch the readability-extracted text rendering of one
/// page. A single attempt per call; retry policy is the caller's concern.
#[async_trait::async_trait]
pub trait ExtractClient: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

/// `ExtractClient` backed by the relay + reader services via reqwest.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    settings: ClientSettings,
}

impl ReaderClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    /// Composes the upstream request URL: the reader prefix wraps the target,
    /// and the whole reader URL is percent-encoded into the relay's `url`
    /// query parameter.
    fn request_url(&self, target: &str) -> Result<url::Url, ExtractError> {
        let reader_url = format!("{}{}", self.settings.reader_endpoint, target);
        let mut relay = url::Url::parse(&self.settings.relay_endpoint)
            .map_err(|err| ExtractError::new(FailureKind::Network, err.to_string()))?;
        relay.query_pairs_mut().append_pair("url", &reader_url);
        Ok(relay)
    }

    fn build_client(&self) -> Result<reqwest::Client, ExtractError> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ExtractError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ExtractClient for ReaderClient {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let request_url = self.request_url(url)?;
        let client = self.build_client()?;

        let response = client
            .get(request_url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("server returned status {}", status.as_u16()),
            ));
        }

        // The body is returned verbatim; the reader service already did the
        // readability extraction.
        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::new(FailureKind::Timeout, "timeout");
    }
    ExtractError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_percent_encodes_the_reader_url() {
        let client = ReaderClient::new(ClientSettings::default());
        let composed = client
            .request_url("https://example.com/page?q=1")
            .expect("compose request url");
        assert_eq!(
            composed.as_str(),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fr.jina.ai%2Fhttps%3A%2F%2Fexample.com%2Fpage%3Fq%3D1"
        );
    }

    #[test]
    fn unparsable_relay_endpoint_is_a_network_error() {
        let client = ReaderClient::new(ClientSettings {
            relay_endpoint: "not an endpoint".to_string(),
            ..ClientSettings::default()
        });
        let err = client.request_url("https://example.com").unwrap_err();
        assert_eq!(err.kind, FailureKind::Network);
    }
}
