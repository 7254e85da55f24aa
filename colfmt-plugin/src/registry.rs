//! Format Registry

use crate::{FormatConfig, FormatEntry, Formatter};
use colfmt_core::{DataType, FormatError, Value};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Ordered, name-unique list of column formats
///
/// Built with the `with_*` methods, then only read. Lookups are
/// case-insensitive; iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    entries: Vec<FormatEntry>,
    index: HashMap<String, usize>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format<F: Formatter + 'static>(self, f: F) -> Self {
        self.with_entry(FormatEntry::new(f))
    }

    /// Add an entry. A name already present is replaced in place.
    pub fn with_entry(mut self, entry: FormatEntry) -> Self {
        let key = entry.name().to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => {
                warn!(format = entry.name(), "duplicate format name, replacing earlier entry");
                self.entries[pos] = entry;
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    /// Drop every entry the configuration excludes
    pub fn apply_config(self, config: &FormatConfig) -> Self {
        for name in &config.exclude {
            if !self.contains(name) {
                warn!(format = %name, "excluded format is not registered");
            }
        }

        let kept = self.entries
            .into_iter()
            .filter(|e| !config.is_excluded(e.name()));
        kept.fold(Self::new(), |reg, e| reg.with_entry(e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&FormatEntry> {
        self.index.get(&name.to_lowercase()).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Entries for one source type, in registration order
    pub fn by_data_type(&self, data_type: DataType) -> Vec<&FormatEntry> {
        self.entries.iter().filter(|e| e.data_type() == data_type).collect()
    }

    pub fn format(&self, name: &str, value: &Value) -> Result<String, FormatError> {
        match self.get(name) {
            Some(entry) => entry.format(value),
            None => {
                let similar = self.find_similar(name);
                let mut err = FormatError::unknown_format(name);
                if !similar.is_empty() {
                    err = err.with_suggestion(format!(
                        "Similar: {}",
                        similar.iter().take(5).copied().collect::<Vec<_>>().join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Format by name, never failing: unknown names and failed
    /// conversions both render the raw value
    pub fn render(&self, name: &str, value: &Value) -> String {
        match self.get(name) {
            Some(entry) => entry.render(value),
            None => {
                debug!(format = name, "unknown format, rendering raw value");
                value.to_string()
            }
        }
    }

    /// Metadata of every entry as a JSON array, in order
    pub fn describe(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.entries
                .iter()
                .map(|e| serde_json::to_value(e.meta()).unwrap_or_default())
                .collect(),
        )
    }

    /// Format names similar to the given name (for error suggestions)
    fn find_similar(&self, name: &str) -> Vec<&'static str> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(&'static str, usize)> = self.entries
            .iter()
            .filter_map(|e| {
                let score = Self::similarity_score(&name_lower, &e.name().to_lowercase());
                if score > 0 { Some((e.name(), score)) } else { None }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = (query.chars().count() as i64 - candidate.chars().count() as i64).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}
