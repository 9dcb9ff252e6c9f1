//! Detail page assembly for a single Pokemon.
//!
//! Given a [`PokemonSource`] and an id, [`DetailPage::load`] fetches the
//! Pokemon, builds its [`TypeChart`] from the type table, and resolves the
//! previous and next Pokemon for navigation. Fetching itself is left to the
//! caller's source implementation; [`MemorySource`] serves records from a
//! JSON dump.

mod config;
mod detail;
mod memory;
mod source;

pub use config::{DEFAULT_NUMBER_WIDTH, PageConfig};
pub use detail::{DetailPage, NavLink, PageError};
pub use memory::MemorySource;
pub use source::PokemonSource;

pub use dexpage_chart::{DefenderTypes, Type, TypeChart};
pub use dexpage_record::PokemonRecord;
