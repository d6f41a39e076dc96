use crate::repositories;
use std::fmt;
use thiserror::Error;

/// The closed set of failures reported to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("You must be signed in to call this function")]
    Unauthenticated,
    #[error("{0}")]
    PermissionDenied(Denial),
    #[error("{0}")]
    InvalidArgument(MissingArgument),
    #[error("User with {0} not found")]
    NotFound(TargetKey),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The caller has no profile document.
    UnknownCaller,
    /// The caller's role is not the privileged role.
    InsufficientRole,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCaller => f.write_str("The calling user was not found"),
            Self::InsufficientRole => f.write_str("Only administrators may manage users"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingArgument {
    UserIdOrEmail,
    UserId,
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserIdOrEmail => f.write_str("userId or userEmail required"),
            Self::UserId => f.write_str("userId required"),
        }
    }
}

/// The key that was used to look up a target account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKey {
    Uid(String),
    Email(String),
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uid(uid) => write!(f, "UID {uid}"),
            Self::Email(email) => write!(f, "email {email}"),
        }
    }
}

impl From<repositories::Error> for Error {
    fn from(err: repositories::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
