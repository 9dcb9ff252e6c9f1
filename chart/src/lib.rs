//! Pokemon type vocabulary and effectiveness chart.
//!
//! This crate holds the fixed 18x18 attacker/defender multiplier table and
//! the pure queries built on it. The table is a `static` array, so every
//! query is a lookup and can be shared freely across threads.
//!
//! # Overview
//!
//! ```text
//! dexpage-record (Pokemon records)
//!        │  type tokens
//!        ▼
//! dexpage-chart (type table + queries) ← THIS CRATE
//!        │
//!        └─> dexpage-page (detail page assembly)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 types, with [`TYPE_CHART`] indexed by discriminant
//! - [`DefenderTypes`] - validated one-or-two type defender set
//! - [`Profile`] - super effective / not effective / no effect partition
//! - [`TypeChart`] - every attacker's multiplier against one defender
//! - [`TypeError`] - rejected type input
//!
//! # Example Usage
//!
//! ```
//! use dexpage_chart::{attack_profile, combined_effectiveness, Type};
//!
//! assert_eq!(combined_effectiveness("ice", &["grass", "water"]), Ok(1.0));
//! assert!(combined_effectiveness("metal", &["fire"]).is_err());
//!
//! let fire = attack_profile(Type::Fire);
//! assert!(fire.super_effective.contains(&Type::Grass));
//! ```

mod error;
pub mod query;
pub mod types;

pub use error::TypeError;
pub use query::{
    attack_profile, combined_effectiveness, defense_profile, Matchup, Profile, TypeChart,
};
pub use types::{DefenderTypes, Type, TYPE_CHART};
