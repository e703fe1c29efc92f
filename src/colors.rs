//! Language to color mapping accumulated across scraped projects.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io;

/// Mapping of language name to the raw color string GitHub renders for it.
///
/// Colors are opaque text (`#dea584`, `rgb(...)`); nothing is validated.
/// Keys serialize in alphabetical order.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LanguageColors(BTreeMap<String, String>);

impl LanguageColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color recorded for `language`, if any (possibly empty).
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Whether `language` already has a usable, non-empty color.
    pub fn is_resolved(&self, language: &str) -> bool {
        self.get(language).is_some_and(|color| !color.is_empty())
    }

    /// Record a color, replacing whatever was there.
    pub fn insert(&mut self, language: String, color: String) {
        self.0.insert(language, color);
    }

    /// Fold another project's colors into this map.
    ///
    /// A non-empty incoming color always wins; an empty one only fills a slot
    /// that does not hold a non-empty color yet.
    pub fn merge(&mut self, other: LanguageColors) {
        for (language, color) in other.0 {
            if !color.is_empty() || !self.is_resolved(&language) {
                self.0.insert(language, color);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tab-indented JSON rendering of the map.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer)?;
        String::from_utf8(buf)
            .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageColors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
