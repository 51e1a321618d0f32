use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::collections::hash_map;

use crate::escape::trim_blank_lines;

static REFERENCE_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[(.+?)\]:\s*(.+)$").expect("reference definition regex")
});

/// Named link targets, keyed by lower-cased reference name.
///
/// The caller owns the table. [`parse`](crate::parse) only inserts the
/// definitions it collects from the document and reads entries back while
/// resolving `[name]` links.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "HashMap<String, String>", into = "HashMap<String, String>")
)]
pub struct LinkTable {
    entries: HashMap<String, String>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the target for `name`. Later definitions win.
    pub fn insert(&mut self, name: &str, url: impl Into<String>) -> Option<String> {
        self.entries.insert(name.to_lowercase(), url.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for LinkTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, url) in iter {
            table.insert(name.as_ref(), url);
        }
        table
    }
}

impl From<HashMap<String, String>> for LinkTable {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<LinkTable> for HashMap<String, String> {
    fn from(table: LinkTable) -> Self {
        table.entries
    }
}

/// Removes every `[name]: url` line from `markdown`, recording each one in
/// `links`, and returns what is left with surrounding blank lines trimmed.
pub fn collect_references(markdown: &str, links: &mut LinkTable) -> String {
    let remaining = REFERENCE_DEF.replace_all(markdown, |caps: &Captures<'_>| {
        let name = &caps[1];
        let url = caps[2].trim();
        tracing::debug!(name, url, "collected link reference");
        links.insert(name, url);
        ""
    });
    trim_blank_lines(&remaining).to_string()
}
