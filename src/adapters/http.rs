use crate::domain::ports::CitySource;
use crate::utils::error::{GeoError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches the cities document with a single GET. No retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl CitySource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(GeoError::HttpStatusError {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
