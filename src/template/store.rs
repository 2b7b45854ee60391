use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::parser::StateMap;

/// Separator used when a group key is flattened for serialization. Reserved:
/// it must never occur inside a real base identifier.
pub const KEY_DELIMITER: &str = "||";

/// Composite grouping key, kept as two separate strings internally so a base
/// identifier containing the delimiter can never collide with another key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub input: String,
    pub universal: String,
}

impl GroupKey {
    pub fn new(input: impl Into<String>, universal: impl Into<String>) -> Self {
        GroupKey {
            input: input.into(),
            universal: universal.into(),
        }
    }

    /// Flattened form used as the JSON object key.
    pub fn flat(&self) -> String {
        format!("{}{}{}", self.input, KEY_DELIMITER, self.universal)
    }
}

/// One observed correspondence between an input state, a universal state and
/// an output state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRecord {
    pub input_state: StateMap,
    pub universal_state: StateMap,
    pub output_state: StateMap,
}

/// Append-only store of template records bucketed by group key. Groups keep
/// first-seen order, records keep append order; nothing is ever rewritten or
/// removed once inserted.
#[derive(Debug, Default, PartialEq)]
pub struct TemplateStore {
    groups: Vec<(GroupKey, Vec<TemplateRecord>)>,
    index: HashMap<GroupKey, usize>,
}

impl TemplateStore {
    pub fn new() -> Self {
        TemplateStore::default()
    }

    /// Append a record under `key`, creating the group if it is new.
    pub fn append(&mut self, key: GroupKey, record: TemplateRecord) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(record),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![record]));
            }
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Records stored under `key`, in append order.
    pub fn records(&self, key: &GroupKey) -> Option<&[TemplateRecord]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[TemplateRecord])> {
        self.groups
            .iter()
            .map(|(key, records)| (key, records.as_slice()))
    }

    /// Resolve an input state under `key` to its observed record. When the
    /// same input state was recorded more than once, the latest observation
    /// wins.
    pub fn lookup(&self, key: &GroupKey, input_state: &StateMap) -> Option<&TemplateRecord> {
        self.records(key)?
            .iter()
            .rev()
            .find(|record| record.input_state == *input_state)
    }
}

impl Serialize for TemplateStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, records) in &self.groups {
            map.serialize_entry(&key.flat(), records)?;
        }
        map.end()
    }
}
