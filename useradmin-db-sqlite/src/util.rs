use anyhow::anyhow;
use std::str::FromStr;

use useradmin_core::{entities as e, repositories::Error};

use super::models::*;

fn load_uid(uid: &str) -> Result<e::Uid, Error> {
    e::Uid::from_str(uid).map_err(|err| anyhow!("Invalid account id '{uid}': {err}").into())
}

impl<'a> From<&'a e::Account> for NewAccount<'a> {
    fn from(a: &'a e::Account) -> Self {
        Self {
            uid: a.uid.as_str(),
            email: a.email.as_ref().map(e::EmailAddress::as_str),
            disabled: a.disabled,
        }
    }
}

impl TryFrom<AccountEntity> for e::Account {
    type Error = Error;
    fn try_from(a: AccountEntity) -> Result<Self, Self::Error> {
        let AccountEntity {
            uid,
            email,
            disabled,
        } = a;
        Ok(Self {
            uid: load_uid(&uid)?,
            // Addresses are stored normalized
            email: email.map(e::EmailAddress::new_unchecked),
            disabled,
        })
    }
}

impl<'a> From<&'a e::Profile> for NewProfile<'a> {
    fn from(p: &'a e::Profile) -> Self {
        Self {
            uid: p.uid.as_str(),
            role: p.role.as_str(),
            status: p.status.as_ref(),
            disabled_at: p.disabled_at.map(e::Timestamp::as_millis),
            disabled_by: p.disabled_by.as_ref().map(e::Uid::as_str),
        }
    }
}

impl TryFrom<ProfileEntity> for e::Profile {
    type Error = Error;
    fn try_from(p: ProfileEntity) -> Result<Self, Self::Error> {
        let ProfileEntity {
            uid,
            role,
            status,
            disabled_at,
            disabled_by,
        } = p;
        let status = e::ProfileStatus::from_str(&status).unwrap_or_else(|_| {
            log::warn!(
                "Could not parse profile status '{status}' of {uid}. Use {} instead.",
                e::ProfileStatus::default()
            );
            e::ProfileStatus::default()
        });
        Ok(Self {
            uid: load_uid(&uid)?,
            role: role.into(),
            status,
            disabled_at: disabled_at.map(e::Timestamp::from_millis),
            disabled_by: disabled_by.as_deref().map(load_uid).transpose()?,
        })
    }
}
