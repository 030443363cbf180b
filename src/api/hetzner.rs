use std::time::Duration;

use super::{client::DnsApiClient, models::*};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub const API_BASE_URL: &str = "https://dns.hetzner.com/api/v1";
const AUTH_HEADER: &str = "Auth-API-Token";

pub struct HetznerClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for HetznerClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let url = format!("{}/zones", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Zones request failed")?
            .error_for_status()
            .context("Zones request was rejected")?;

        let body: ZonesResponse = response
            .json()
            .await
            .context("Failed to parse zones response")?;

        Ok(body.zones)
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>> {
        let url = format!("{}/records", self.base_url);
        debug!("GET {}?zone_id={}", url, zone_id);

        let response = self
            .client
            .get(&url)
            .query(&[("zone_id", zone_id)])
            .send()
            .await
            .with_context(|| format!("Records request failed for zone {}", zone_id))?
            .error_for_status()
            .with_context(|| format!("Records request was rejected for zone {}", zone_id))?;

        let body: RecordsResponse = response
            .json()
            .await
            .context("Failed to parse records response")?;

        Ok(body.records)
    }

    async fn update_record(&self, record: &Record, zone_id: &str) -> Result<()> {
        let url = format!("{}/records/{}", self.base_url, record.id);
        debug!("PUT {}", url);

        // The response body is not used, only the status
        self.client
            .put(&url)
            .json(&RecordUpdate::new(record, zone_id))
            .send()
            .await
            .with_context(|| format!("Update request failed for record {}", record.id))?
            .error_for_status()
            .with_context(|| format!("Update was rejected for record {}", record.id))?;

        Ok(())
    }
}

impl HetznerClient {
    pub fn new(api_token: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(Self::build_headers(api_token)?)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_headers(api_token: &str) -> Result<HeaderMap> {
        let mut token =
            HeaderValue::from_str(api_token).context("API token is not a valid header value")?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
