use crate::api::{Record, Zone};

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Zone {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Record {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn filter_by_name<'a, T: Named>(items: &'a [T], search: &str) -> Vec<&'a T> {
    if search.is_empty() {
        return items.iter().collect();
    }

    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}
