use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::DownstreamError;
use crate::presentation::config::HttpClientSettings;

/// JSON-over-HTTP client shared by every downstream adapter.
///
/// Transient failures (connection errors, 500/502/503/504) are retried up to
/// `max_retries` times with a linearly growing delay.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    timeout_secs: u64,
    max_retries: u32,
    retry_backoff: Duration,
}

impl RestClient {
    pub fn new(settings: &HttpClientSettings) -> Result<Self, DownstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .danger_accept_invalid_certs(!settings.verify_tls)
            .build()
            .map_err(|e| DownstreamError::Request(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: settings.timeout_secs,
            max_retries: settings.max_retries,
            retry_backoff: Duration::from_millis(settings.retry_backoff_ms),
        })
    }

    pub async fn post_json<T, R>(&self, url: &str, body: &T) -> Result<R, DownstreamError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut attempt = 0;
        loop {
            match self.post_once(url, body).await {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_backoff * attempt;
                    tracing::warn!(
                        url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying downstream call"
                    );
                    tokio::time::sleep(delay).await;
                }
                outcome => return outcome,
            }
        }
    }

    async fn post_once<T, R>(&self, url: &str, body: &T) -> Result<R, DownstreamError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(url, e))?;

        if !status.is_success() {
            return Err(DownstreamError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| DownstreamError::InvalidResponse(format!("POST {}: {}", url, e)))
    }

    fn map_send_error(&self, url: &str, error: reqwest::Error) -> DownstreamError {
        if error.is_timeout() {
            DownstreamError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else if error.is_connect() {
            DownstreamError::Connection(url.to_string())
        } else {
            DownstreamError::Request(format!("POST {}: {}", url, error))
        }
    }
}
