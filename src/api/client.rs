use super::models::*;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    async fn list_zones(&self) -> Result<Vec<Zone>>;
    async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>>;
    async fn update_record(&self, record: &Record, zone_id: &str) -> Result<()>;
}
