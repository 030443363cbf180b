use thiserror::Error;

// Display text is what the console shows; causes are logged where they occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Failed to fetch zones")]
    FetchZones,

    #[error("Failed to fetch records")]
    FetchRecords,

    #[error("Failed to update record")]
    UpdateRecord,

    #[error("No zone selected")]
    NoZoneSelected,

    #[error("No zone matches {0:?}")]
    UnknownZone(String),

    #[error("No record with id {0:?}")]
    UnknownRecord(String),

    #[error("Unknown record field {0:?}, expected type, name, value or ttl")]
    UnknownField(String),

    #[error("TTL must be a whole number of seconds, got {0:?}")]
    InvalidTtl(String),
}
