//! Per-key option records and the extraction result.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::extract::error::ExtractError;
use crate::extract::token::FLAG_VALUE;

/// Whether an option was seen with or without a value.
///
/// Fixed by the first occurrence of a key; later occurrences must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Flag,
    Valued,
}

/// Everything recorded for one option key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    kind: OptionKind,
    values: Vec<String>,
}

impl OptionRecord {
    fn flag() -> Self {
        Self {
            kind: OptionKind::Flag,
            values: vec![FLAG_VALUE.to_string()],
        }
    }

    fn valued(value: &str) -> Self {
        Self {
            kind: OptionKind::Valued,
            values: vec![value.to_string()],
        }
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Values in the order they were supplied. `["true"]` for flags.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Result of a successful extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    records: BTreeMap<String, OptionRecord>,
    trailing: Vec<String>,
}

impl Extraction {
    /// Option keys mapped to their values, in key order.
    pub fn extracted(&self) -> BTreeMap<&str, &[String]> {
        self.records
            .iter()
            .map(|(key, record)| (key.as_str(), record.values()))
            .collect()
    }

    /// Tokens classified as operands, in input order.
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }

    pub fn record(&self, key: &str) -> Option<&OptionRecord> {
        self.records.get(key)
    }

    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.record(key).map(OptionRecord::values)
    }

    pub fn is_flag(&self, key: &str) -> bool {
        self.record(key)
            .is_some_and(|record| record.kind() == OptionKind::Flag)
    }

    /// Number of distinct option keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.trailing.is_empty()
    }

    /// Split into the key → values map and the trailing tokens.
    pub fn into_parts(self) -> (BTreeMap<String, Vec<String>>, Vec<String>) {
        let extracted = self
            .records
            .into_iter()
            .map(|(key, record)| (key, record.values))
            .collect();
        (extracted, self.trailing)
    }

    /// Record `key` as a flag.
    ///
    /// Repeating a flag is allowed and keeps the single sentinel value.
    pub(crate) fn record_flag(&mut self, key: &str) -> Result<(), ExtractError> {
        match self.records.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(OptionRecord::flag());
                Ok(())
            }
            Entry::Occupied(slot) => match slot.get().kind {
                OptionKind::Flag => Ok(()),
                OptionKind::Valued => Err(ExtractError::AmbiguousOption(key.to_string())),
            },
        }
    }

    /// Record `value` for `key`, appending when the key was seen before.
    pub(crate) fn record_value(&mut self, key: &str, value: &str) -> Result<(), ExtractError> {
        match self.records.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(OptionRecord::valued(value));
                Ok(())
            }
            Entry::Occupied(mut slot) => match slot.get().kind {
                OptionKind::Valued => {
                    slot.get_mut().values.push(value.to_string());
                    Ok(())
                }
                OptionKind::Flag => Err(ExtractError::AmbiguousOption(key.to_string())),
            },
        }
    }

    pub(crate) fn push_trailing(&mut self, token: &str) {
        self.trailing.push(token.to_string());
    }
}
