//! Combined effectiveness and per-type matchup profiles

use crate::error::TypeError;
use crate::types::{DefenderTypes, Type};

/// How a multiplier reads to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matchup {
    /// Multiplier above 1
    SuperEffective,
    /// Multiplier strictly between 0 and 1
    NotEffective,
    /// Multiplier of exactly 0
    NoEffect,
    /// Multiplier of exactly 1
    Neutral,
}

impl Matchup {
    pub fn classify(multiplier: f32) -> Self {
        if multiplier > 1.0 {
            Matchup::SuperEffective
        } else if multiplier == 0.0 {
            Matchup::NoEffect
        } else if multiplier < 1.0 {
            Matchup::NotEffective
        } else {
            Matchup::Neutral
        }
    }
}

impl Type {
    /// Combined multiplier against every type of `defenders`
    pub fn against(&self, defenders: &DefenderTypes) -> f32 {
        defenders
            .iter()
            .fold(1.0, |acc, t| acc * self.effectiveness(t))
    }
}

/// Combined effectiveness of `attack` against one or two defending tokens.
///
/// Tokens must be canonical lowercase type names. The attacker is checked
/// first, then the defender count, then each defender.
pub fn combined_effectiveness<S: AsRef<str>>(attack: &str, defenders: &[S]) -> Result<f32, TypeError> {
    let attack: Type = attack.parse()?;
    let defenders = DefenderTypes::parse(defenders)?;
    Ok(attack.against(&defenders))
}

/// Types partitioned by matchup, neutral types omitted.
///
/// Each list is in [`Type::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    pub super_effective: Vec<Type>,
    pub not_effective: Vec<Type>,
    pub no_effect: Vec<Type>,
}

impl Profile {
    fn from_multipliers(multipliers: impl Iterator<Item = (Type, f32)>) -> Self {
        let mut profile = Profile::default();
        for (t, m) in multipliers {
            match Matchup::classify(m) {
                Matchup::SuperEffective => profile.super_effective.push(t),
                Matchup::NotEffective => profile.not_effective.push(t),
                Matchup::NoEffect => profile.no_effect.push(t),
                Matchup::Neutral => {}
            }
        }
        profile
    }

    /// Which bucket `t` falls in, `Neutral` if none
    pub fn matchup_of(&self, t: Type) -> Matchup {
        if self.super_effective.contains(&t) {
            Matchup::SuperEffective
        } else if self.not_effective.contains(&t) {
            Matchup::NotEffective
        } else if self.no_effect.contains(&t) {
            Matchup::NoEffect
        } else {
            Matchup::Neutral
        }
    }

    /// Types in none of the three lists
    pub fn neutral(&self) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| self.matchup_of(*t) == Matchup::Neutral)
            .collect()
    }
}

/// Classify every defending type against `attack`
pub fn attack_profile(attack: Type) -> Profile {
    Profile::from_multipliers(
        Type::all()
            .iter()
            .map(|&defender| (defender, attack.effectiveness(defender))),
    )
}

/// Classify every attacking type against `defense`
pub fn defense_profile(defense: Type) -> Profile {
    Profile::from_multipliers(
        Type::all()
            .iter()
            .map(|&attacker| (attacker, attacker.effectiveness(defense))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TYPE_CHART;

    #[test]
    fn test_single_type_matches_chart() {
        for attacker in Type::all() {
            for defender in Type::all() {
                let got = combined_effectiveness(attacker.as_str(), &[defender.as_str()]).unwrap();
                assert_eq!(
                    got,
                    TYPE_CHART[*attacker as usize][*defender as usize],
                    "{attacker} vs {defender}"
                );
            }
        }
    }

    #[test]
    fn test_known_matchups() {
        assert_eq!(combined_effectiveness("fire", &["grass"]), Ok(2.0));
        assert_eq!(combined_effectiveness("ground", &["flying"]), Ok(0.0));
        assert_eq!(combined_effectiveness("normal", &["ghost"]), Ok(0.0));
    }

    #[test]
    fn test_dual_type_composition() {
        assert_eq!(combined_effectiveness("ice", &["grass", "water"]), Ok(1.0));
        assert_eq!(combined_effectiveness("fire", &["grass", "steel"]), Ok(4.0));
        assert_eq!(combined_effectiveness("fire", &["water", "rock"]), Ok(0.25));
        assert_eq!(combined_effectiveness("grass", &["fire", "flying"]), Ok(0.25));
        assert_eq!(combined_effectiveness("electric", &["water", "flying"]), Ok(4.0));
    }

    #[test]
    fn test_immunity_dominates() {
        assert_eq!(combined_effectiveness("normal", &["ghost", "water"]), Ok(0.0));
        assert_eq!(combined_effectiveness("ground", &["flying", "steel"]), Ok(0.0));
        assert_eq!(combined_effectiveness("electric", &["water", "ground"]), Ok(0.0));
    }

    #[test]
    fn test_order_of_defenders_is_irrelevant() {
        for a in Type::all() {
            for d1 in Type::all() {
                for d2 in Type::all() {
                    assert_eq!(
                        a.against(&DefenderTypes::dual(*d1, *d2)),
                        a.against(&DefenderTypes::dual(*d2, *d1))
                    );
                }
            }
        }
    }

    #[test]
    fn test_results_stay_in_range() {
        let allowed = [0.0, 0.125, 0.25, 0.5, 1.0, 2.0, 4.0];
        for a in Type::all() {
            for d1 in Type::all() {
                for d2 in Type::all() {
                    let m = a.against(&DefenderTypes::dual(*d1, *d2));
                    assert!(allowed.contains(&m), "{a} vs {d1}/{d2} = {m}");
                }
            }
        }
    }

    #[test]
    fn test_axes_not_transposed() {
        assert_eq!(combined_effectiveness("fire", &["water"]), Ok(0.5));
        assert_eq!(combined_effectiveness("water", &["fire"]), Ok(2.0));
        assert_eq!(combined_effectiveness("ghost", &["normal"]), Ok(0.0));
        assert_eq!(combined_effectiveness("dark", &["ghost"]), Ok(2.0));
        assert_eq!(combined_effectiveness("ghost", &["dark"]), Ok(0.5));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            combined_effectiveness("metal", &["fire"]),
            Err(TypeError::InvalidType("metal".to_string()))
        );
        assert_eq!(
            combined_effectiveness("fire", &["Water"]),
            Err(TypeError::InvalidType("Water".to_string()))
        );
        let none: [&str; 0] = [];
        assert_eq!(combined_effectiveness("fire", &none), Err(TypeError::NoDefenderTypes));
        assert_eq!(
            combined_effectiveness("fire", &["water", "grass", "rock"]),
            Err(TypeError::TooManyDefenderTypes(3))
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(Matchup::classify(4.0), Matchup::SuperEffective);
        assert_eq!(Matchup::classify(2.0), Matchup::SuperEffective);
        assert_eq!(Matchup::classify(1.0), Matchup::Neutral);
        assert_eq!(Matchup::classify(0.5), Matchup::NotEffective);
        assert_eq!(Matchup::classify(0.125), Matchup::NotEffective);
        assert_eq!(Matchup::classify(0.0), Matchup::NoEffect);
    }

    #[test]
    fn test_attack_profile_fire() {
        let p = attack_profile(Type::Fire);
        assert_eq!(
            p.super_effective,
            vec![Type::Bug, Type::Steel, Type::Grass, Type::Ice]
        );
        assert_eq!(
            p.not_effective,
            vec![Type::Rock, Type::Fire, Type::Water, Type::Dragon]
        );
        assert!(p.no_effect.is_empty());
    }

    #[test]
    fn test_defense_profile_ghost() {
        let p = defense_profile(Type::Ghost);
        assert_eq!(p.super_effective, vec![Type::Ghost, Type::Dark]);
        assert_eq!(p.not_effective, vec![Type::Poison, Type::Bug]);
        assert_eq!(p.no_effect, vec![Type::Normal, Type::Fighting]);
    }

    #[test]
    fn test_profiles_partition_all_types() {
        for t in Type::all() {
            for p in [attack_profile(*t), defense_profile(*t)] {
                let mut seen: Vec<Type> = p
                    .super_effective
                    .iter()
                    .chain(&p.not_effective)
                    .chain(&p.no_effect)
                    .chain(&p.neutral())
                    .copied()
                    .collect();
                assert_eq!(seen.len(), 18, "{t}");
                seen.sort();
                seen.dedup();
                assert_eq!(seen.len(), 18, "{t} has overlapping buckets");
            }
        }
    }

    #[test]
    fn test_attack_profile_agrees_with_combined() {
        for a in Type::all() {
            let p = attack_profile(*a);
            for d in Type::all() {
                let m = combined_effectiveness(a.as_str(), &[d.as_str()]).unwrap();
                assert_eq!(p.matchup_of(*d), Matchup::classify(m), "{a} vs {d}");
            }
        }
    }

    #[test]
    fn test_defense_profile_is_column_of_attack_profiles() {
        for d in Type::all() {
            let p = defense_profile(*d);
            for a in Type::all() {
                assert_eq!(p.matchup_of(*a), attack_profile(*a).matchup_of(*d));
            }
        }
    }
}
