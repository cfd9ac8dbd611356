//! Location picking and role dealing.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RouletteError, RouletteResult};
use crate::location::{Location, LocationCatalog};
use crate::random::RandomSource;
use crate::role::Role;

/// Member to role pairs, kept in party order.
///
/// Serializes as a JSON object whose keys follow party order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<(String, Role)>,
}

impl Assignment {
    /// Role held by a member.
    pub fn get(&self, member: &str) -> Option<&Role> {
        self.pairs.iter().find(|(m, _)| m == member).map(|(_, r)| r)
    }

    /// Iterate over `(member, role)` in party order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Role)> {
        self.pairs.iter().map(|(m, r)| (m.as_str(), r))
    }

    /// Members in party order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(m, _)| m.as_str())
    }

    /// Number of members assigned.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nobody is assigned.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn push(&mut self, member: impl Into<String>, role: Role) {
        self.pairs.push((member.into(), role));
    }

    pub(crate) fn pairs_mut(&mut self) -> &mut [(String, Role)] {
        &mut self.pairs
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (member, role) in &self.pairs {
            map.serialize_entry(member, role)?;
        }
        map.end()
    }
}

struct AssignmentVisitor;

impl<'de> serde::de::Visitor<'de> for AssignmentVisitor {
    type Value = Assignment;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a map of member names to roles")
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(
        self,
        mut access: A,
    ) -> Result<Assignment, A::Error> {
        let mut assignment = Assignment::default();
        while let Some((member, role)) = access.next_entry::<String, Role>()? {
            assignment.push(member, role);
        }
        Ok(assignment)
    }
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AssignmentVisitor)
    }
}

/// Pick a location uniformly at random. Picks are independent across calls.
pub fn pick_location<'a, R: RandomSource + ?Sized>(
    catalog: &'a LocationCatalog,
    rng: &mut R,
) -> RouletteResult<&'a Location> {
    let entries = catalog.entries();
    if entries.is_empty() {
        return Err(RouletteError::EmptyCatalog);
    }
    Ok(&entries[rng.below(entries.len())])
}

/// Deal each member one role, drawn without replacement from a fresh copy of
/// `roles`. The result pairs every member with exactly one role and uses
/// every role exactly once.
pub fn deal_roles<S: AsRef<str>, R: RandomSource + ?Sized>(
    members: &[S],
    roles: &[Role],
    rng: &mut R,
) -> RouletteResult<Assignment> {
    if members.len() != roles.len() {
        return Err(RouletteError::RoleCountMismatch {
            members: members.len(),
            roles: roles.len(),
        });
    }

    let mut pool = roles.to_vec();
    let mut assignment = Assignment::default();
    for member in members {
        let role = pool.remove(rng.below(pool.len()));
        assignment.push(member.as_ref(), role);
    }
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::session_rng;
    use proptest::prelude::*;

    const PARTY: [&str; 4] = ["Shin", "Figgy", "Nari", "Jing"];

    fn assert_bijection(assignment: &Assignment, members: &[String], roles: &[Role]) {
        assert_eq!(assignment.len(), members.len());
        for m in members {
            assert_eq!(assignment.members().filter(|x| *x == m.as_str()).count(), 1);
        }
        for r in roles {
            assert_eq!(assignment.iter().filter(|(_, x)| *x == r).count(), 1);
        }
    }

    #[test]
    fn deal_standard_party() {
        let mut rng = session_rng(Some(1));
        let roles = Role::standard();
        let a = deal_roles(&PARTY, &roles, &mut rng).unwrap();
        let members: Vec<String> = PARTY.iter().map(|s| s.to_string()).collect();
        assert_bijection(&a, &members, &roles);
        assert_eq!(a.members().collect::<Vec<_>>(), PARTY);
    }

    #[test]
    fn role_pool_not_consumed_across_deals() {
        let mut rng = session_rng(Some(2));
        let roles = Role::standard();
        for _ in 0..50 {
            let a = deal_roles(&PARTY, &roles, &mut rng).unwrap();
            assert_eq!(a.len(), 4);
        }
        assert_eq!(roles, Role::standard());
    }

    #[test]
    fn mismatched_lengths() {
        let mut rng = session_rng(Some(3));
        let err = deal_roles(&PARTY[..3], &Role::standard(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RouletteError::RoleCountMismatch {
                members: 3,
                roles: 4
            }
        ));
    }

    #[test]
    fn every_role_reaches_every_member() {
        let mut rng = session_rng(Some(4));
        let roles = Role::standard();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let a = deal_roles(&PARTY, &roles, &mut rng).unwrap();
            for (m, r) in a.iter() {
                seen.insert((m.to_string(), r.clone()));
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn pick_covers_catalog() {
        let mut rng = session_rng(Some(5));
        let catalog = LocationCatalog::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_location(&catalog, &mut rng).unwrap().id.clone());
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn assignment_serializes_in_party_order() {
        let mut a = Assignment::default();
        a.push("Zed", Role::Tank);
        a.push("Amy", Role::Healer);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"Zed":"Tank","Amy":"Healer"}"#);
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    proptest! {
        #[test]
        fn deal_is_bijection_for_any_size(size in 1usize..=12, seed in any::<u64>()) {
            let members: Vec<String> = (0..size).map(|i| format!("m{i}")).collect();
            let roles: Vec<Role> = (0..size).map(|i| Role::Custom(format!("r{i}"))).collect();
            let mut rng = session_rng(Some(seed));
            let a = deal_roles(&members, &roles, &mut rng).unwrap();
            assert_bijection(&a, &members, &roles);
        }
    }
}
