//! Property census: which fields appear on every record of a data file and
//! which are optional. Diagnostic only; nothing downstream depends on it.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::store::RawRecords;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCensus {
    /// Every property name seen on any record
    pub all: BTreeSet<String>,
    /// Properties present on every record
    pub required: BTreeSet<String>,
    /// Properties missing from at least one record
    pub optional: BTreeSet<String>,
}

impl PropertyCensus {
    /// Survey a data file. Returns `None` when its records are not objects
    /// (e.g. recipe strings), matching on the first record only.
    pub fn from_records(records: &RawRecords) -> Option<Self> {
        let objects: Vec<_> = match records.values().next() {
            Some(Value::Object(_)) => records.values().filter_map(Value::as_object).collect(),
            _ => return None,
        };

        let all: BTreeSet<String> = objects.iter().flat_map(|o| o.keys().cloned()).collect();
        let (required, optional): (BTreeSet<String>, BTreeSet<String>) = all
            .iter()
            .cloned()
            .partition(|prop| objects.iter().all(|o| o.contains_key(prop)));

        Some(Self {
            all,
            required,
            optional,
        })
    }

    pub fn log(&self, file: &str) {
        log::debug!("{file}: all props: {:?}", self.all);
        log::debug!("{file}: non-optional props: {:?}", self.required);
        log::debug!("{file}: optional props: {:?}", self.optional);
    }
}
