use dexpage_chart::{DefenderTypes, TypeChart, TypeError};
use dexpage_record::PokemonRecord;
use thiserror::Error;

use crate::config::PageConfig;
use crate::source::PokemonSource;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Pokemon {0} not found")]
    NotFound(u32),

    #[error("Pokemon has unusable types: {0}")]
    InvalidType(#[from] TypeError),

    #[error("Pokemon source failed: {0:#}")]
    Source(#[from] anyhow::Error),
}

/// A navigation target: id and its `name #NNN` label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: u32,
    pub label: String,
}

/// Everything the detail page shows for one Pokemon
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub pokemon: PokemonRecord,
    pub defenders: DefenderTypes,
    pub type_chart: TypeChart,
    pub prev: Option<PokemonRecord>,
    pub next: Option<PokemonRecord>,
    number_width: usize,
}

impl DetailPage {
    /// Assemble the page for `id` with default settings
    pub async fn load<S: PokemonSource + ?Sized>(source: &S, id: u32) -> Result<Self, PageError> {
        Self::load_with(source, id, &PageConfig::default()).await
    }

    pub async fn load_with<S: PokemonSource + ?Sized>(
        source: &S,
        id: u32,
        config: &PageConfig,
    ) -> Result<Self, PageError> {
        if id == 0 {
            tracing::debug!(id, "Rejecting non-positive Pokemon id");
            return Err(PageError::NotFound(id));
        }

        let Some(pokemon) = source.fetch(id).await? else {
            tracing::debug!(id, "Pokemon not found");
            return Err(PageError::NotFound(id));
        };

        let defenders = DefenderTypes::parse(pokemon.type_names().as_slice()).inspect_err(|e| {
            tracing::warn!(id, name = %pokemon.name, error = %e, "Pokemon record has invalid types");
        })?;
        let type_chart = TypeChart::for_defenders(&defenders);

        let (prev, next) = if config.include_neighbors {
            Self::neighbors(source, id).await?
        } else {
            (None, None)
        };

        tracing::debug!(
            id,
            name = %pokemon.name,
            types = %defenders,
            has_prev = prev.is_some(),
            has_next = next.is_some(),
            "Assembled detail page"
        );

        Ok(Self {
            pokemon,
            defenders,
            type_chart,
            prev,
            next,
            number_width: config.number_width,
        })
    }

    async fn neighbors<S: PokemonSource + ?Sized>(
        source: &S,
        id: u32,
    ) -> anyhow::Result<(Option<PokemonRecord>, Option<PokemonRecord>)> {
        let prev = async {
            match id.checked_sub(1).filter(|p| *p > 0) {
                Some(p) => source.fetch(p).await,
                None => Ok(None),
            }
        };
        let next = async {
            match id.checked_add(1) {
                Some(n) => source.fetch(n).await,
                None => Ok(None),
            }
        };
        tokio::try_join!(prev, next)
    }

    pub fn title(&self) -> &str {
        &self.pokemon.name
    }

    /// Zero-padded number, e.g. `#025`
    pub fn number(&self) -> String {
        self.pokemon.display_number(self.number_width)
    }

    pub fn prev_link(&self) -> Option<NavLink> {
        self.prev.as_ref().map(|p| self.link(p))
    }

    pub fn next_link(&self) -> Option<NavLink> {
        self.next.as_ref().map(|p| self.link(p))
    }

    fn link(&self, record: &PokemonRecord) -> NavLink {
        NavLink {
            id: record.id,
            label: format!("{} {}", record.name, record.display_number(self.number_width)),
        }
    }
}
