use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use anyhow::{Context, Result};

/// Key/value table read from `generated_dts_board.conf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    map: HashMap<String, String>,
}

impl Definitions {
    /// Parses `KEY=VALUE` lines. Lines without `=` are skipped, the value is
    /// trimmed and a repeated key keeps its last value.
    pub fn parse(text: &str) -> Self {
        let mut map = HashMap::new();
        for line in text.lines() {
            if let Some((key, value)) = line.split_once('=') {
                map.insert(key.to_string(), value.trim().to_string());
            }
        }
        Definitions { map }
    }

    /// Reads and parses the database at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read device tree defines from {:?}", path))?;
        let defines = Self::parse(&text);
        tracing::debug!("Loaded {} device tree defines from {:?}", defines.len(), path);
        Ok(defines)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Definitions {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
