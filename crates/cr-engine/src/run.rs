//! A single randomized run: one location and one role per member.

use crate::assign::{Assignment, deal_roles, pick_location};
use crate::error::RouletteResult;
use crate::location::LocationCatalog;
use crate::random::RandomSource;
use crate::role::Role;

/// One generated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    id: u32,
    location: String,
    assignment: Assignment,
    rarity_count: u32,
}

impl Run {
    /// Draw a location and deal `roles` to `members`.
    pub fn create<S: AsRef<str>, R: RandomSource + ?Sized>(
        id: u32,
        catalog: &LocationCatalog,
        members: &[S],
        roles: &[Role],
        rng: &mut R,
    ) -> RouletteResult<Self> {
        let location = pick_location(catalog, rng)?.id.clone();
        let assignment = deal_roles(members, roles, rng)?;
        Ok(Self {
            id,
            location,
            assignment,
            rarity_count: 0,
        })
    }

    /// Hand `replacement` to the first member, in party order, whose role is
    /// neither protected nor already `replacement`.
    ///
    /// Returns whether a member was changed. Only call this once per run.
    pub fn trigger_rarity_event(&mut self, replacement: &Role, protected: &[Role]) -> bool {
        let eligible = self
            .assignment
            .pairs_mut()
            .iter_mut()
            .find(|(_, role)| !protected.contains(role) && role != replacement);

        match eligible {
            Some((_, role)) => {
                *role = replacement.clone();
                self.rarity_count += 1;
                true
            }
            None => false,
        }
    }

    /// Sequential id within the session, starting at 1.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Location id.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Member to role mapping.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// How many rarity events touched this run (0 or 1).
    pub fn rarity_count(&self) -> u32 {
        self.rarity_count
    }

    /// Whether a rarity event changed this run.
    pub fn has_rarity(&self) -> bool {
        self.rarity_count > 0
    }
}
