use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub value: String,
    // Records without a TTL inherit the zone default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

// Always carries every mutable field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordUpdate<'a> {
    pub r#type: &'a str,
    pub name: &'a str,
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    pub zone_id: &'a str,
}

impl<'a> RecordUpdate<'a> {
    pub fn new(record: &'a Record, zone_id: &'a str) -> Self {
        Self {
            r#type: &record.r#type,
            name: &record.name,
            value: &record.value,
            ttl: record.ttl,
            zone_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ZonesResponse {
    pub zones: Vec<Zone>,
}

#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
}
