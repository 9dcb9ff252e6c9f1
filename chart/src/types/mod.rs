//! Domain types for type matchups

mod defenders;
mod pokemon_type;

pub use defenders::DefenderTypes;
pub use pokemon_type::{Type, TYPE_CHART};
