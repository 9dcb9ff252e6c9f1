use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dexpage_record::{PokemonRecord, parse_records};

use crate::source::PokemonSource;

/// Records held in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<u32, PokemonRecord>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records with a repeated id replace earlier ones
    pub fn from_records(records: impl IntoIterator<Item = PokemonRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Build from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records = parse_records(json).context("Failed to parse Pokemon records")?;
        Ok(Self::from_records(records))
    }

    /// Load a JSON array of records from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let source = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), records = source.len(), "Loaded Pokemon records");
        Ok(source)
    }

    pub fn insert(&mut self, record: PokemonRecord) {
        self.records.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PokemonSource for MemorySource {
    async fn fetch(&self, id: u32) -> Result<Option<PokemonRecord>> {
        Ok(self.records.get(&id).cloned())
    }
}
