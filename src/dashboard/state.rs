use crate::error::DashboardError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Zones,
    Records {
        zone_id: String,
    },
}

// Load state of one remote list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resource<T> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(DashboardError),
}

impl<T> Resource<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Resource::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            Resource::Loaded(items) => Some(items),
            _ => None,
        }
    }
}
