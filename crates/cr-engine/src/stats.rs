//! Aggregation over a session's runs.

use crate::location::LocationCatalog;
use crate::role::Role;
use crate::run::Run;

/// Run count per location, in catalog order. Every catalog entry is present,
/// including those never drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCounts {
    counts: Vec<(String, usize)>,
}

impl LocationCounts {
    /// Count runs per catalog location.
    pub fn tally(runs: &[Run], catalog: &LocationCatalog) -> Self {
        let counts = catalog
            .ids()
            .map(|id| {
                let n = runs.iter().filter(|r| r.location() == id).count();
                (id.to_string(), n)
            })
            .collect();
        Self { counts }
    }

    /// Count for one location id, `None` if it is not in the catalog.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.counts.iter().find(|(l, _)| l == id).map(|(_, n)| *n)
    }

    /// Iterate over `(location id, count)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, n)| (l.as_str(), *n))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Counts joined with `/`, e.g. `5/0/1`.
    pub fn slashed(&self) -> String {
        self.counts
            .iter()
            .map(|(_, n)| n.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// How often `member` held each role, in the order of `roles`.
pub fn role_counts(runs: &[Run], member: &str, roles: &[Role]) -> Vec<(Role, usize)> {
    roles
        .iter()
        .map(|role| {
            let n = runs
                .iter()
                .filter(|r| r.assignment().get(member) == Some(role))
                .count();
            (role.clone(), n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::random::session_rng;

    const PARTY: [&str; 4] = ["Shin", "Figgy", "Nari", "Jing"];

    fn runs(n: u32, seed: u64) -> Vec<Run> {
        let mut rng = session_rng(Some(seed));
        let catalog = LocationCatalog::default();
        (1..=n)
            .map(|id| Run::create(id, &catalog, &PARTY, &Role::standard(), &mut rng).unwrap())
            .collect()
    }

    #[test]
    fn empty_runs_list_every_location() {
        let counts = LocationCounts::tally(&[], &LocationCatalog::default());
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![("ASS", 0), ("AMR", 0), ("AAI", 0)]
        );
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.slashed(), "0/0/0");
    }

    #[test]
    fn counts_sum_to_run_count() {
        for n in [1, 7, 40] {
            let rs = runs(n, u64::from(n));
            let counts = LocationCounts::tally(&rs, &LocationCatalog::default());
            assert_eq!(counts.total(), rs.len());
        }
    }

    #[test]
    fn unknown_location_has_no_count() {
        let counts = LocationCounts::tally(&[], &LocationCatalog::default());
        assert_eq!(counts.get("XYZ"), None);
        assert_eq!(counts.get("AMR"), Some(0));
    }

    #[test]
    fn catalog_order_is_kept() {
        let catalog =
            LocationCatalog::new(vec![Location::new("B", "Bee"), Location::new("A", "Ay")])
                .unwrap();
        let counts = LocationCounts::tally(&[], &catalog);
        assert_eq!(counts.iter().map(|(id, _)| id).collect::<Vec<_>>(), ["B", "A"]);
    }

    #[test]
    fn role_counts_cover_every_run() {
        let rs = runs(25, 3);
        for member in PARTY {
            let counts = role_counts(&rs, member, &Role::standard());
            assert_eq!(
                counts.iter().map(|(r, _)| r.clone()).collect::<Vec<_>>(),
                Role::standard()
            );
            assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 25);
        }
    }
}
