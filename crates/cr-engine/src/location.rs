//! The location catalog runs are drawn from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RouletteError, RouletteResult};

/// A location a run can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Short id used in logs and the scoreboard (e.g. `ASS`).
    pub id: String,
    /// Full display name.
    pub name: String,
}

impl Location {
    /// Create a location.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An ordered, non-empty set of locations with unique ids.
///
/// Catalog order is the order used for counts and the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct LocationCatalog {
    entries: Vec<Location>,
}

impl LocationCatalog {
    /// Build a catalog, rejecting empty lists and duplicate ids.
    pub fn new(entries: Vec<Location>) -> RouletteResult<Self> {
        if entries.is_empty() {
            return Err(RouletteError::EmptyCatalog);
        }
        for (i, loc) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.id == loc.id) {
                return Err(RouletteError::DuplicateLocation(loc.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from a JSON array of `{"id": ..., "name": ...}`.
    pub fn from_json(json: &str) -> RouletteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> RouletteResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Iterate over location ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|l| l.id.as_str())
    }

    /// Look up a location by id.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.entries.iter().find(|l| l.id == id)
    }

    /// Display name for an id.
    pub fn name_of(&self, id: &str) -> RouletteResult<&str> {
        self.get(id)
            .map(|l| l.name.as_str())
            .ok_or_else(|| RouletteError::UnknownLocation(id.to_string()))
    }

    /// Whether the id is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest display name.
    pub fn max_name_width(&self) -> usize {
        self.entries
            .iter()
            .map(|l| l.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                Location::new("ASS", "Another Sil'dihn Subterrane"),
                Location::new("AMR", "Another Mount Rokkon"),
                Location::new("AAI", "Another Aloalo Island"),
            ],
        }
    }
}

impl TryFrom<Vec<Location>> for LocationCatalog {
    type Error = RouletteError;

    fn try_from(entries: Vec<Location>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<LocationCatalog> for Vec<Location> {
    fn from(catalog: LocationCatalog) -> Self {
        catalog.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog() {
        let c = LocationCatalog::default();
        assert_eq!(c.ids().collect::<Vec<_>>(), vec!["ASS", "AMR", "AAI"]);
        assert_eq!(c.name_of("AMR").unwrap(), "Another Mount Rokkon");
        assert_eq!(c.max_name_width(), "Another Sil'dihn Subterrane".len());
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = LocationCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, RouletteError::EmptyCatalog));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = LocationCatalog::new(vec![
            Location::new("A", "Alpha"),
            Location::new("A", "Again"),
        ])
        .unwrap_err();
        assert!(matches!(err, RouletteError::DuplicateLocation(id) if id == "A"));
    }

    #[test]
    fn unknown_location() {
        let c = LocationCatalog::default();
        assert!(matches!(
            c.name_of("XYZ"),
            Err(RouletteError::UnknownLocation(_))
        ));
        assert!(!c.contains("XYZ"));
    }

    #[test]
    fn from_json_keeps_order() {
        let c = LocationCatalog::from_json(
            r#"[{"id": "Z", "name": "Zeta"}, {"id": "A", "name": "Alpha"}]"#,
        )
        .unwrap();
        assert_eq!(c.ids().collect::<Vec<_>>(), vec!["Z", "A"]);
    }

    #[test]
    fn from_json_validates() {
        assert!(LocationCatalog::from_json("[]").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"id": "T1", "name": "Trial One"}]"#).unwrap();
        let c = LocationCatalog::load(&path).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.name_of("T1").unwrap(), "Trial One");
    }
}
