use thiserror::Error;

pub mod pokemon;

pub use pokemon::{
    AbilitySlot, ArtworkSprites, NamedResource, OtherSprites, PokemonRecord, Sprites, StatSlot,
    TypeSlot, parse_record, parse_records,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid id: {0}")]
    InvalidId(u32),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
