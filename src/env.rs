//! The global binding environment: a single flat scope, per spec.md §3 —
//! "no nested frames".

use indexmap::IndexMap;

use crate::value::Value;

/// A process-wide mapping from identifier to [`Value`]. `Void` is never
/// stored; see `spec.md` §4.4 (`ASSIGN` produces `Void` and returns it
/// directly, it is never written through this map).
///
/// Backed by an `IndexMap` rather than a `HashMap` so that
/// [`Environment::iter`] enumerates bindings in insertion order, giving a
/// host's `!list` command stable, readable output without this crate
/// hand-rolling an ordered map.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self { Environment { bindings: IndexMap::new() } }

    pub fn get(&self, name: &str) -> Option<&Value> { self.bindings.get(name) }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn clear(&mut self) { self.bindings.clear(); }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
