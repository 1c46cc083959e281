//! # docsetup Project Info
//!
//! File: cli/src/core/project_info.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! `ProjectInfo` is the key/value mapping assembled during a setup run. Keys
//! are placeholder names (`PROJECT_NAME`, `OUTPUT_TABLE`, ...) and values are
//! the strings substituted for `{{KEY}}` in the templates.
//!
//! The map keeps insertion order, so the persisted `.config.json` lists keys
//! in the order the questions were asked and the defaults derived.
//!
use crate::core::error::{DocsError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered placeholder-name to value mapping collected for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectInfo(IndexMap<String, String>);

impl ProjectInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Like `get`, but an absent key reads as the empty string.
    ///
    /// Derivations only ever read keys the collector has already set, so this
    /// keeps them free of `Option` plumbing.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the mapping as a JSON object indented with two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DocsError::from(e).into())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProjectInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = ProjectInfo::new();
        for (k, v) in iter {
            info.insert(k, v);
        }
        info
    }
}
