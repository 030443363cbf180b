pub mod editor;
pub mod state;

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::api::{DnsApiClient, Record, Zone};
use crate::debounce::Debouncer;
use crate::error::DashboardError;
use crate::filter::filter_by_name;

pub use editor::RecordField;
pub use state::{Resource, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(err: DashboardError) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: err.to_string(),
        }
    }
}

pub struct Dashboard<C> {
    client: C,
    screen: Screen,
    zones: Resource<Zone>,
    records: Resource<Record>,
    confirmed: HashMap<String, Record>,
    zone_search: Debouncer<String>,
    record_search: Debouncer<String>,
}

impl<C: DnsApiClient> Dashboard<C> {
    pub fn new(client: C, search_debounce: Duration) -> Self {
        Self {
            client,
            screen: Screen::Zones,
            zones: Resource::Idle,
            records: Resource::Idle,
            confirmed: HashMap::new(),
            zone_search: Debouncer::new(String::new(), search_debounce),
            record_search: Debouncer::new(String::new(), search_debounce),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn zones(&self) -> &Resource<Zone> {
        &self.zones
    }

    pub fn records(&self) -> &Resource<Record> {
        &self.records
    }

    pub fn selected_zone_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::Records { zone_id } => Some(zone_id),
            Screen::Zones => None,
        }
    }

    // Falls back to the id when the zone list doesn't know it
    pub fn selected_zone_name(&self) -> Option<&str> {
        let zone_id = self.selected_zone_id()?;
        Some(
            self.zones
                .items()
                .iter()
                .find(|z| z.id == zone_id)
                .map(|z| z.name.as_str())
                .unwrap_or(zone_id),
        )
    }

    pub async fn load_zones(&mut self) {
        self.zones = Resource::Loading;
        let result = self.client.list_zones().await;
        self.zones_loaded(result);
    }

    pub fn zones_loaded(&mut self, result: Result<Vec<Zone>>) {
        self.zones = match result {
            Ok(zones) => {
                info!("Loaded {} zones", zones.len());
                Resource::Loaded(zones)
            }
            Err(e) => {
                error!("Failed to fetch zones: {:#}", e);
                Resource::Failed(DashboardError::FetchZones)
            }
        };
    }

    pub async fn select_zone(&mut self, zone_id: &str) {
        info!("Selected zone {}", zone_id);
        self.screen = Screen::Records {
            zone_id: zone_id.to_string(),
        };
        self.record_search.reset(String::new());
        self.load_records().await;
    }

    async fn load_records(&mut self) {
        let Some(zone_id) = self.selected_zone_id().map(str::to_string) else {
            return;
        };
        self.records = Resource::Loading;
        self.confirmed.clear();
        let result = self.client.list_records(&zone_id).await;
        self.records_loaded(&zone_id, result);
    }

    // Results for a zone that is no longer selected are dropped
    pub fn records_loaded(&mut self, zone_id: &str, result: Result<Vec<Record>>) -> bool {
        if self.selected_zone_id() != Some(zone_id) {
            warn!("Discarding stale records response for zone {}", zone_id);
            return false;
        }

        self.records = match result {
            Ok(records) => {
                info!("Loaded {} records for zone {}", records.len(), zone_id);
                self.confirmed = records.iter().map(|r| (r.id.clone(), r.clone())).collect();
                Resource::Loaded(records)
            }
            Err(e) => {
                error!("Failed to fetch records for zone {}: {:#}", zone_id, e);
                self.confirmed.clear();
                Resource::Failed(DashboardError::FetchRecords)
            }
        };
        true
    }

    pub fn back(&mut self) {
        self.screen = Screen::Zones;
        self.records = Resource::Idle;
        self.confirmed.clear();
        self.record_search.reset(String::new());
    }

    pub async fn reload(&mut self) {
        match self.screen {
            Screen::Zones => self.load_zones().await,
            Screen::Records { .. } => self.load_records().await,
        }
    }

    pub fn set_search(&mut self, search: &str) {
        match self.screen {
            Screen::Zones => self.zone_search.push(search.to_string()),
            Screen::Records { .. } => self.record_search.push(search.to_string()),
        }
    }

    pub fn search_input(&self) -> &str {
        match self.screen {
            Screen::Zones => self.zone_search.latest(),
            Screen::Records { .. } => self.record_search.latest(),
        }
    }

    pub fn search_pending(&self) -> bool {
        match self.screen {
            Screen::Zones => self.zone_search.deadline().is_some(),
            Screen::Records { .. } => self.record_search.deadline().is_some(),
        }
    }

    // Only the visible screen's search is waited on; the other one keeps its
    // deadline until its screen comes back.
    pub async fn settle_search(&mut self) {
        match self.screen {
            Screen::Zones => self.zone_search.settle().await,
            Screen::Records { .. } => self.record_search.settle().await,
        }
    }

    pub fn filtered_zones(&self) -> Vec<&Zone> {
        filter_by_name(self.zones.items(), self.zone_search.current())
    }

    pub fn filtered_records(&self) -> Vec<&Record> {
        filter_by_name(self.records.items(), self.record_search.current())
    }

    // By 1-based row in the filtered view, id, or exact name
    pub fn resolve_zone(&self, query: &str) -> Result<String, DashboardError> {
        let visible = self.filtered_zones();
        if let Ok(row) = query.parse::<usize>() {
            if let Some(zone) = row.checked_sub(1).and_then(|i| visible.get(i)) {
                return Ok(zone.id.clone());
            }
        }

        self.zones
            .items()
            .iter()
            .find(|z| z.id == query || z.name.eq_ignore_ascii_case(query))
            .map(|z| z.id.clone())
            .ok_or_else(|| DashboardError::UnknownZone(query.to_string()))
    }

    pub fn edit_field(
        &mut self,
        record_id: &str,
        field: RecordField,
        value: &str,
    ) -> Result<(), DashboardError> {
        let record = self.record_mut(record_id)?;
        field.apply(record, value)?;
        debug!("Set {} of record {} to {:?}", field, record_id, value);
        Ok(())
    }

    // No rollback: a failed update keeps the local edit
    pub async fn persist(&mut self, record_id: &str) -> Notification {
        let Some(zone_id) = self.selected_zone_id().map(str::to_string) else {
            return Notification::error(DashboardError::NoZoneSelected);
        };
        let record = match self.record(record_id) {
            Ok(record) => record.clone(),
            Err(e) => return Notification::error(e),
        };

        match self.client.update_record(&record, &zone_id).await {
            Ok(()) => {
                info!("Updated record {} in zone {}", record.id, zone_id);
                self.confirmed.insert(record.id.clone(), record);
                Notification::success("Record updated successfully!")
            }
            Err(e) => {
                error!("Failed to update record {}: {:#}", record.id, e);
                Notification::error(DashboardError::UpdateRecord)
            }
        }
    }

    pub fn is_modified(&self, record_id: &str) -> bool {
        match (self.record(record_id), self.confirmed.get(record_id)) {
            (Ok(current), Some(confirmed)) => current != confirmed,
            _ => false,
        }
    }

    pub fn revert(&mut self, record_id: &str) -> Result<(), DashboardError> {
        let confirmed = self
            .confirmed
            .get(record_id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownRecord(record_id.to_string()))?;
        *self.record_mut(record_id)? = confirmed;
        Ok(())
    }

    fn record(&self, record_id: &str) -> Result<&Record, DashboardError> {
        self.records
            .items()
            .iter()
            .find(|r| r.id == record_id)
            .ok_or_else(|| DashboardError::UnknownRecord(record_id.to_string()))
    }

    fn record_mut(&mut self, record_id: &str) -> Result<&mut Record, DashboardError> {
        self.records
            .items_mut()
            .and_then(|records| records.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| DashboardError::UnknownRecord(record_id.to_string()))
    }
}
