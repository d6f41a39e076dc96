use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

/// Identity providers reject longer account identifiers.
pub const MAX_UID_LEN: usize = 128;

/// Opaque identifier of an account at the identity provider.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uid(String);

impl Uid {
    pub fn new() -> Self {
        Uuid::new_v4().into()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UidParseError {
    #[error("The user id is empty")]
    Empty,
    #[error("The user id exceeds {MAX_UID_LEN} characters")]
    TooLong,
}

impl FromStr for Uid {
    type Err = UidParseError;
    fn from_str(s: &str) -> Result<Uid, Self::Err> {
        if s.is_empty() {
            return Err(UidParseError::Empty);
        }
        if s.chars().count() > MAX_UID_LEN {
            return Err(UidParseError::TooLong);
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<Uuid> for Uid {
    fn from(from: Uuid) -> Self {
        Self(from.as_simple().to_string())
    }
}

impl From<Uid> for String {
    fn from(from: Uid) -> Self {
        from.0
    }
}

impl AsRef<str> for Uid {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Uid {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
