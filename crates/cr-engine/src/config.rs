//! Configuration for a roulette session.

use crate::error::{RouletteError, RouletteResult};
use crate::location::LocationCatalog;
use crate::role::Role;

/// Default party size.
pub const PARTY_SIZE: usize = 4;

/// Default chance of a rarity event per run while rarity mode is on.
pub const RARITY_CHANCE: f64 = 0.05;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct RouletteConfig {
    /// RNG seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of members in the party.
    pub party_size: usize,
    /// Roles dealt each run, in display order.
    pub roles: Vec<Role>,
    /// Roles a rarity event can hand out.
    pub rarity_roles: Vec<Role>,
    /// Roles a rarity event never overwrites.
    pub protected_roles: Vec<Role>,
    /// Chance of a rarity event per run, in `[0, 1]`.
    pub rarity_chance: f64,
    /// Locations runs are drawn from.
    pub catalog: LocationCatalog,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            seed: None,
            party_size: PARTY_SIZE,
            roles: Role::standard(),
            rarity_roles: Role::rarity_pool(),
            protected_roles: Role::protected(),
            rarity_chance: RARITY_CHANCE,
            catalog: LocationCatalog::default(),
        }
    }
}

impl RouletteConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the location catalog.
    pub fn with_catalog(mut self, catalog: LocationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the role set. The party size follows the number of roles.
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.party_size = roles.len();
        self.roles = roles;
        self
    }

    /// Replace the rarity role pool.
    pub fn with_rarity_roles(mut self, roles: Vec<Role>) -> Self {
        self.rarity_roles = roles;
        self
    }

    /// Replace the protected roles.
    pub fn with_protected_roles(mut self, roles: Vec<Role>) -> Self {
        self.protected_roles = roles;
        self
    }

    /// Set the rarity chance.
    pub fn with_rarity_chance(mut self, chance: f64) -> Self {
        self.rarity_chance = chance;
        self
    }

    /// Check that runs can be generated from this configuration.
    pub fn validate(&self) -> RouletteResult<()> {
        if self.catalog.is_empty() {
            return Err(RouletteError::EmptyCatalog);
        }
        if self.roles.is_empty() || self.rarity_roles.is_empty() {
            return Err(RouletteError::EmptyRoleSet);
        }
        if self.roles.len() != self.party_size {
            return Err(RouletteError::RoleCountMismatch {
                members: self.party_size,
                roles: self.roles.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.rarity_chance) {
            return Err(RouletteError::InvalidRarityChance(self.rarity_chance));
        }
        Ok(())
    }
}
