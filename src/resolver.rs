//! Locates the numeric reading inside an arbitrary binding graph.

use crate::data_types::Binding;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Container fields searched on the top-level binding, in this order.
pub const CONTAINER_FIELDS: [&str; 5] = ["data", "dataset", "values", "rows", "resultSet"];

/// Key fragments that mark a field as the likely reading (case-insensitive).
pub const PRIORITY_KEY_FRAGMENTS: [&str; 2] = ["value", "raw"];

const MAX_DEPTH: usize = 512;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingSource {
    Binding,
    Fallback,
    #[default]
    Missing,
}

/// Outcome of resolving a binding or its fallback scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericReading {
    pub value: f64,
    pub found: bool,
    pub source: ReadingSource,
}

impl NumericReading {
    pub fn found(value: f64, source: ReadingSource) -> Self {
        Self {
            value,
            found: true,
            source,
        }
    }

    pub fn missing() -> Self {
        Self {
            value: f64::NAN,
            found: false,
            source: ReadingSource::Missing,
        }
    }
}

/// Depth-first search for the first finite number in a binding graph.
pub struct ValueResolver {
    visited: HashSet<*const ()>,
}

impl ValueResolver {
    /// Resolves `binding`, falling back to the scalar `fallback`.
    pub fn resolve(binding: &Binding, fallback: &Binding) -> NumericReading {
        if let Some(v) = Self::resolve_binding(binding) {
            return NumericReading::found(v, ReadingSource::Binding);
        }
        if let Some(v) = fallback.coerce_number() {
            debug!(value = v, "binding yielded no reading, using fallback scalar");
            return NumericReading::found(v, ReadingSource::Fallback);
        }
        debug!(?binding, "no finite reading found");
        NumericReading::missing()
    }

    /// Binding-only part of [`ValueResolver::resolve`].
    pub fn resolve_binding(binding: &Binding) -> Option<f64> {
        if let Some(v) = binding.as_finite() {
            return Some(v);
        }

        // Generic traversal of the binding itself, accessor first.
        if let Some(v) = Self::new().search(binding, 0) {
            return Some(v);
        }

        // Named containers, each searched independently of the pass above.
        for name in CONTAINER_FIELDS {
            let Some(field) = binding.field(name) else {
                continue;
            };
            if field.is_null() {
                continue;
            }
            if let Some(v) = Self::new().search(&field, 0) {
                return Some(v);
            }
        }
        None
    }

    fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    fn search(&mut self, node: &Binding, depth: usize) -> Option<f64> {
        if depth > MAX_DEPTH {
            debug!(depth, "binding nested too deeply, giving up on branch");
            return None;
        }
        if let Some(id) = node.identity() {
            if !self.visited.insert(id) {
                return None;
            }
        }

        match node {
            Binding::Number(n) => n.is_finite().then_some(*n),
            Binding::Accessor(accessor) => match accessor.get_data() {
                Ok(data) => self.search(&data, depth + 1),
                Err(err) => {
                    debug!(error = %err, "data accessor failed, treating as miss");
                    None
                }
            },
            Binding::Sequence(seq) => seq
                .items()
                .iter()
                .find_map(|item| self.search(item, depth + 1)),
            Binding::Record(record) => {
                let entries = record.entries();
                let prioritized = entries
                    .iter()
                    .filter(|(key, _)| is_priority_key(key))
                    .find_map(|(_, value)| self.search(value, depth + 1));
                prioritized.or_else(|| {
                    entries
                        .iter()
                        .find_map(|(_, value)| self.search(value, depth + 1))
                })
            }
            Binding::Null | Binding::Bool(_) | Binding::Text(_) => None,
        }
    }
}

fn is_priority_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    PRIORITY_KEY_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_key_match_is_case_insensitive() {
        assert!(is_priority_key("RawScore"));
        assert!(is_priority_key("measureVALUE"));
        assert!(!is_priority_key("count"));
    }
}
