//! Full attacker chart for one defending Pokemon

use crate::types::{DefenderTypes, Type};

/// Combined multiplier of every attacking type against one defender,
/// in [`Type::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    defenders: DefenderTypes,
    multipliers: [f32; 18],
}

impl TypeChart {
    pub fn for_defenders(defenders: &DefenderTypes) -> Self {
        let mut multipliers = [1.0; 18];
        for t in Type::all() {
            multipliers[*t as usize] = t.against(defenders);
        }
        Self {
            defenders: *defenders,
            multipliers,
        }
    }

    pub fn defenders(&self) -> &DefenderTypes {
        &self.defenders
    }

    /// Multiplier for an attacking type
    pub fn get(&self, attacker: Type) -> f32 {
        self.multipliers[attacker as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Type, f32)> + '_ {
        Type::all().iter().map(|t| (*t, self.get(*t)))
    }

    /// Attacking types that are super effective (>1x)
    pub fn weaknesses(&self) -> Vec<Type> {
        self.filter(|m| m > 1.0)
    }

    /// Attacking types that are resisted (0 < effectiveness < 1)
    pub fn resistances(&self) -> Vec<Type> {
        self.filter(|m| m > 0.0 && m < 1.0)
    }

    /// Attacking types that have no effect
    pub fn immunities(&self) -> Vec<Type> {
        self.filter(|m| m == 0.0)
    }

    /// Check if any of the attacking types is super effective
    pub fn is_weak_to_any(&self, attacking_types: &[Type]) -> bool {
        attacking_types.iter().any(|t| self.get(*t) > 1.0)
    }

    /// Check if every attacking type is resisted; false for an empty list
    pub fn resists_all(&self, attacking_types: &[Type]) -> bool {
        if attacking_types.is_empty() {
            return false;
        }
        attacking_types.iter().all(|t| self.get(*t) < 1.0)
    }

    pub fn is_immune_to(&self, attacking_type: Type) -> bool {
        self.get(attacking_type) == 0.0
    }

    fn filter(&self, keep: impl Fn(f32) -> bool) -> Vec<Type> {
        self.iter()
            .filter(|(_, m)| keep(*m))
            .map(|(t, _)| t)
            .collect()
    }
}

impl From<&DefenderTypes> for TypeChart {
    fn from(defenders: &DefenderTypes) -> Self {
        Self::for_defenders(defenders)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeChart {
    /// Serializes as a `{ "<type>": multiplier }` map in display order
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(18))?;
        for (t, m) in self.iter() {
            map.serialize_entry(t.as_str(), &m)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(types: &[Type]) -> TypeChart {
        TypeChart::for_defenders(&DefenderTypes::new(types).unwrap())
    }

    #[test]
    fn test_covers_all_types_in_order() {
        let c = chart(&[Type::Water]);
        let order: Vec<Type> = c.iter().map(|(t, _)| t).collect();
        assert_eq!(order, Type::ALL.to_vec());
        assert_eq!(c.get(Type::Electric), 2.0);
        assert_eq!(c.get(Type::Fire), 0.5);
    }

    #[test]
    fn test_is_weak_to_any() {
        let gyarados = chart(&[Type::Water, Type::Flying]);
        assert!(gyarados.is_weak_to_any(&[Type::Fire, Type::Electric]));
        assert!(!gyarados.is_weak_to_any(&[Type::Fire, Type::Ground, Type::Grass]));
        assert!(!gyarados.is_weak_to_any(&[]));
    }

    #[test]
    fn test_resists_all() {
        let charizard = chart(&[Type::Fire, Type::Flying]);
        assert!(charizard.resists_all(&[Type::Bug, Type::Grass, Type::Fairy]));
        assert!(!charizard.resists_all(&[Type::Bug, Type::Rock]));
        // an immunity is not a resistance, but it is below 1x
        assert!(charizard.resists_all(&[Type::Ground]));
        assert!(!charizard.resists_all(&[]));
    }

    #[test]
    fn test_is_immune_to() {
        let gengar = chart(&[Type::Ghost, Type::Poison]);
        assert!(gengar.is_immune_to(Type::Normal));
        assert!(gengar.is_immune_to(Type::Fighting));
        assert!(!gengar.is_immune_to(Type::Dark));

        assert!(chart(&[Type::Water, Type::Flying]).is_immune_to(Type::Ground));
        assert!(!chart(&[Type::Electric]).is_immune_to(Type::Ground));
    }

    #[test]
    fn test_weaknesses_bulbasaur() {
        let bulbasaur = chart(&[Type::Grass, Type::Poison]);
        assert_eq!(
            bulbasaur.weaknesses(),
            vec![Type::Flying, Type::Fire, Type::Psychic, Type::Ice]
        );
        assert_eq!(bulbasaur.get(Type::Ground), 1.0);
        assert_eq!(bulbasaur.get(Type::Bug), 1.0);
    }

    #[test]
    fn test_weaknesses_four_times() {
        let charizard = chart(&[Type::Fire, Type::Flying]);
        assert_eq!(
            charizard.weaknesses(),
            vec![Type::Rock, Type::Water, Type::Electric]
        );
        assert_eq!(charizard.get(Type::Rock), 4.0);
        assert_eq!(charizard.immunities(), vec![Type::Ground]);

        let gyarados = chart(&[Type::Water, Type::Flying]);
        assert_eq!(gyarados.weaknesses(), vec![Type::Rock, Type::Electric]);
        assert_eq!(gyarados.get(Type::Electric), 4.0);
    }

    #[test]
    fn test_resistances() {
        let bulbasaur = chart(&[Type::Grass, Type::Poison]);
        assert_eq!(
            bulbasaur.resistances(),
            vec![Type::Fighting, Type::Water, Type::Grass, Type::Electric, Type::Fairy]
        );
        assert_eq!(bulbasaur.get(Type::Grass), 0.25);

        let charizard = chart(&[Type::Fire, Type::Flying]);
        assert_eq!(charizard.get(Type::Bug), 0.25);
        assert!(!charizard.resistances().contains(&Type::Ground));
    }

    #[test]
    fn test_immunities() {
        let gengar = chart(&[Type::Ghost, Type::Poison]);
        assert_eq!(gengar.immunities(), vec![Type::Normal, Type::Fighting]);
        assert_eq!(
            gengar.weaknesses(),
            vec![Type::Ground, Type::Ghost, Type::Psychic, Type::Dark]
        );
        assert!(chart(&[Type::Grass, Type::Poison]).immunities().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_value(chart(&[Type::Normal])).unwrap();
        assert_eq!(json["ghost"], 0.0);
        assert_eq!(json["fighting"], 2.0);
        assert_eq!(json.as_object().unwrap().len(), 18);
    }
}
