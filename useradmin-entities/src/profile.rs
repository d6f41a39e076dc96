use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{time::Timestamp, uid::Uid};

/// The role of a user as stored in the profile document.
///
/// Roles are free-form names; which of them is privileged
/// is decided by the administration policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Role {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Role {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Role> for String {
    fn from(from: Role) -> Self {
        from.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProfileStatus {
    #[default]
    Active,
    Disabled,
}

/// The profile document `users/{uid}` of an account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub uid         : Uid,
    pub role        : Role,
    pub status      : ProfileStatus,
    pub disabled_at : Option<Timestamp>,
    pub disabled_by : Option<Uid>,
}

impl Profile {
    pub fn new(uid: Uid, role: Role) -> Self {
        Self {
            uid,
            role,
            status: ProfileStatus::Active,
            disabled_at: None,
            disabled_by: None,
        }
    }
}
