//! Validated defending type set

use crate::error::TypeError;
use crate::types::Type;

/// The one or two types of a defending Pokemon.
///
/// Order is preserved as given. Construction rejects empty and
/// over-long inputs, so every value here is a valid lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefenderTypes {
    types: [Type; 2],
    len: usize,
}

impl DefenderTypes {
    /// Single-typed defender
    pub fn single(primary: Type) -> Self {
        Self {
            types: [primary, primary],
            len: 1,
        }
    }

    /// Dual-typed defender
    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            types: [primary, secondary],
            len: 2,
        }
    }

    /// Build from a slice of 1 or 2 types
    pub fn new(types: &[Type]) -> Result<Self, TypeError> {
        match *types {
            [] => Err(TypeError::NoDefenderTypes),
            [primary] => Ok(Self::single(primary)),
            [primary, secondary] => Ok(Self::dual(primary, secondary)),
            _ => Err(TypeError::TooManyDefenderTypes(types.len())),
        }
    }

    /// Parse 1 or 2 type tokens.
    ///
    /// The count is checked before the tokens, so `[]` and three valid
    /// tokens fail on count rather than on content.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TypeError> {
        if tokens.is_empty() {
            return Err(TypeError::NoDefenderTypes);
        }
        if tokens.len() > 2 {
            return Err(TypeError::TooManyDefenderTypes(tokens.len()));
        }
        let types = tokens
            .iter()
            .map(|s| s.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&types)
    }

    pub fn as_slice(&self) -> &[Type] {
        &self.types[..self.len]
    }

    pub fn primary(&self) -> Type {
        self.types[0]
    }

    pub fn secondary(&self) -> Option<Type> {
        (self.len == 2).then_some(self.types[1])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, t: Type) -> bool {
        self.as_slice().contains(&t)
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        self.as_slice().iter().copied()
    }
}

impl From<Type> for DefenderTypes {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl TryFrom<&[Type]> for DefenderTypes {
    type Error = TypeError;

    fn try_from(types: &[Type]) -> Result<Self, Self::Error> {
        Self::new(types)
    }
}

impl std::fmt::Display for DefenderTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary() {
            Some(secondary) => write!(f, "{}/{}", self.primary(), secondary),
            None => write!(f, "{}", self.primary()),
        }
    }
}
