//! Effectiveness queries over the type chart
//!
//! This module provides the combined-effectiveness computation, per-type
//! attack/defense profiles, and the full chart for one defending Pokemon.

mod effectiveness;
mod type_chart;

pub use effectiveness::{attack_profile, combined_effectiveness, defense_profile, Matchup, Profile};
pub use type_chart::TypeChart;
