//! Party roles.
//!
//! The four standard roles come first in their canonical order. `Custom`
//! exists so alternate role sets can be configured without touching the
//! engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A role a party member can be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Holds enemy attention.
    Tank,
    /// Keeps the party alive.
    Healer,
    /// Close-range damage.
    Melee,
    /// Long-range damage.
    Ranged,
    /// A user-defined role.
    Custom(String),
}

impl Role {
    /// The default role set, in canonical order.
    pub fn standard() -> Vec<Role> {
        vec![Self::Tank, Self::Healer, Self::Melee, Self::Ranged]
    }

    /// Roles a rarity event can hand out.
    pub fn rarity_pool() -> Vec<Role> {
        vec![Self::Tank, Self::Healer, Self::Melee]
    }

    /// Roles a rarity event never overwrites.
    pub fn protected() -> Vec<Role> {
        vec![Self::Tank, Self::Healer]
    }

    /// Parse a role name. Standard names match case-insensitively; anything
    /// else becomes a custom role.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "tank" => Self::Tank,
            "healer" => Self::Healer,
            "melee" => Self::Melee,
            "ranged" => Self::Ranged,
            _ => Self::Custom(trimmed.to_string()),
        }
    }

    /// Display width of the role name, used for table alignment.
    pub fn width(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tank => write!(f, "Tank"),
            Self::Healer => write!(f, "Healer"),
            Self::Melee => write!(f, "Melee"),
            Self::Ranged => write!(f, "Ranged"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}
