//! Error types for the roulette engine.

use thiserror::Error;

/// Result type for roulette operations.
pub type RouletteResult<T> = Result<T, RouletteError>;

/// Broad category of a [`RouletteError`], used by drivers to decide how to
/// report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad catalog, role set or rarity settings.
    Configuration,
    /// Bad member list.
    Validation,
    /// Query against something the session does not know.
    NotFound,
    /// Operation not allowed in the session's current state.
    State,
    /// Journal file or record failure.
    Journal,
}

/// Errors that can occur while generating or querying runs.
#[derive(Debug, Error)]
pub enum RouletteError {
    /// The location catalog has no entries.
    #[error("no locations configured")]
    EmptyCatalog,

    /// Two catalog entries share an id.
    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),

    /// The role set has no entries.
    #[error("no roles configured")]
    EmptyRoleSet,

    /// Members and roles cannot be paired one-to-one.
    #[error("cannot deal {roles} roles to {members} members")]
    RoleCountMismatch {
        /// Number of members to deal to.
        members: usize,
        /// Number of roles in the pool.
        roles: usize,
    },

    /// Rarity chance outside of [0, 1].
    #[error("invalid rarity chance: {0}")]
    InvalidRarityChance(f64),

    /// The member list does not match the party size.
    #[error("incorrect number of party members: expected {expected}, got {found}")]
    MemberCount {
        /// Configured party size.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },

    /// The same name appears more than once.
    #[error("no duplicate names allowed: {0}")]
    DuplicateMember(String),

    /// A member name is empty or whitespace.
    #[error("member names cannot be blank")]
    BlankMember,

    /// The member is not part of this session.
    #[error("unknown member: {0}")]
    UnknownMember(String),

    /// The location id is not in the catalog.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The session has already ended.
    #[error("session has ended")]
    SessionEnded,

    /// Run ids are exhausted.
    #[error("run limit reached")]
    RunLimit,

    /// Reading or writing the run log failed.
    #[error("log file error: {0}")]
    Io(#[from] std::io::Error),

    /// A log record could not be encoded or decoded.
    #[error("log record error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouletteError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCatalog
            | Self::DuplicateLocation(_)
            | Self::EmptyRoleSet
            | Self::RoleCountMismatch { .. }
            | Self::InvalidRarityChance(_) => ErrorKind::Configuration,
            Self::MemberCount { .. } | Self::DuplicateMember(_) | Self::BlankMember => {
                ErrorKind::Validation
            }
            Self::UnknownMember(_) | Self::UnknownLocation(_) => ErrorKind::NotFound,
            Self::SessionEnded | Self::RunLimit => ErrorKind::State,
            Self::Io(_) | Self::Json(_) => ErrorKind::Journal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(RouletteError::EmptyCatalog.kind(), ErrorKind::Configuration);
        assert_eq!(
            RouletteError::RoleCountMismatch {
                members: 3,
                roles: 4
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(RouletteError::BlankMember.kind(), ErrorKind::Validation);
        assert_eq!(
            RouletteError::UnknownMember("Zed".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(RouletteError::SessionEnded.kind(), ErrorKind::State);
        assert_eq!(RouletteError::RunLimit.kind(), ErrorKind::State);
    }

    #[test]
    fn member_count_message() {
        let err = RouletteError::MemberCount {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "incorrect number of party members: expected 4, got 3"
        );
    }
}
