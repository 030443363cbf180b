
use crate::api::{Record, Zone};

pub(crate) fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        ttl: None,
        records_count: None,
    }
}

pub(crate) fn record(id: &str, r#type: &str, name: &str, value: &str, ttl: u32) -> Record {
    Record {
        id: id.to_string(),
        r#type: r#type.to_string(),
        name: name.to_string(),
        value: value.to_string(),
        ttl: Some(ttl),
    }
}
