use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use useradmin_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod account;
mod document;
mod profile;

#[cfg(test)]
use document::DELETE_CHUNK_SIZE;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Updates and deletes of a single record report
// an unknown key through the number of affected rows.
fn expect_affected_row(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}
