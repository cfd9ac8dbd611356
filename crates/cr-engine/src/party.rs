//! The validated member list for a session.

use serde::{Deserialize, Serialize};

use crate::error::{RouletteError, RouletteResult};

/// Names used when no members are entered.
pub const SAMPLE_PARTY: [&str; 4] = ["Shin", "Figgy", "Nari", "Jing"];

/// An ordered list of unique, non-blank member names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Party {
    members: Vec<String>,
}

impl Party {
    /// Validate a member list against the expected party size.
    pub fn new<S: Into<String>>(
        members: impl IntoIterator<Item = S>,
        size: usize,
    ) -> RouletteResult<Self> {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.len() != size {
            return Err(RouletteError::MemberCount {
                expected: size,
                found: members.len(),
            });
        }
        for (i, name) in members.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RouletteError::BlankMember);
            }
            if members[..i].contains(name) {
                return Err(RouletteError::DuplicateMember(name.clone()));
            }
        }
        Ok(Self { members })
    }

    /// Parse a line of typed names: whitespace separated, each capitalized.
    pub fn parse(line: &str, size: usize) -> RouletteResult<Self> {
        Self::new(line.split_whitespace().map(capitalize), size)
    }

    /// The sample party.
    pub fn sample() -> Self {
        Self {
            members: SAMPLE_PARTY.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Member names in order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether the name belongs to this party.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the party has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.members.join(", "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
