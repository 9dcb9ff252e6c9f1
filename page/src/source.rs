use anyhow::Result;
use async_trait::async_trait;
use dexpage_record::PokemonRecord;

/// Where Pokemon records come from.
///
/// Implementations fetch a record by its positive numeric id and return
/// `Ok(None)` when no such Pokemon exists. `Err` is reserved for the source
/// itself failing (I/O, decoding, ...).
///
/// # Example
///
/// ```ignore
/// struct Api {
///     http: reqwest::Client,
/// }
///
/// #[async_trait]
/// impl PokemonSource for Api {
///     async fn fetch(&self, id: u32) -> Result<Option<PokemonRecord>> {
///         // GET /pokemon/{id}, map 404 to Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, id: u32) -> Result<Option<PokemonRecord>>;
}

#[async_trait]
impl<T: PokemonSource + ?Sized> PokemonSource for std::sync::Arc<T> {
    async fn fetch(&self, id: u32) -> Result<Option<PokemonRecord>> {
        (**self).fetch(id).await
    }
}
