use std::{fmt, str::FromStr};

use crate::api::Record;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Type,
    Name,
    Value,
    Ttl,
}

impl RecordField {
    pub fn apply(self, record: &mut Record, value: &str) -> Result<(), DashboardError> {
        match self {
            RecordField::Type => record.r#type = value.to_string(),
            RecordField::Name => record.name = value.to_string(),
            RecordField::Value => record.value = value.to_string(),
            RecordField::Ttl => {
                let ttl = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| DashboardError::InvalidTtl(value.to_string()))?;
                record.ttl = Some(ttl);
            }
        }
        Ok(())
    }
}

impl FromStr for RecordField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "type" => Ok(RecordField::Type),
            "name" => Ok(RecordField::Name),
            "value" => Ok(RecordField::Value),
            "ttl" => Ok(RecordField::Ttl),
            _ => Err(DashboardError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Type => "type",
            RecordField::Name => "name",
            RecordField::Value => "value",
            RecordField::Ttl => "ttl",
        };
        f.write_str(name)
    }
}
