// Low-level access traits for the external collaborators.
// The identity provider owns the accounts, the document
// store owns the profile documents and their sub-collections.
// Related records are only referenced by the account id.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait IdentityRepo {
    fn create_account(&self, account: &Account) -> Result<()>;

    fn get_account(&self, uid: &Uid) -> Result<Account>;
    fn get_account_by_email(&self, email: &EmailAddress) -> Result<Account>;

    // Fails with `NotFound` if the account does not exist
    fn delete_account(&self, uid: &Uid) -> Result<()>;
    fn set_account_disabled(&self, uid: &Uid, disabled: bool) -> Result<()>;
}

pub trait ProfileRepo {
    fn create_profile(&self, profile: &Profile) -> Result<()>;

    fn get_profile(&self, uid: &Uid) -> Result<Profile>;
    fn try_get_profile(&self, uid: &Uid) -> Result<Option<Profile>>;

    // Deleting a missing profile is not an error
    fn delete_profile(&self, uid: &Uid) -> Result<()>;

    /// Set the status to [`ProfileStatus::Disabled`] and record who did it.
    ///
    /// The store assigns the timestamp of the change and returns it.
    /// Fails with `NotFound` if the profile does not exist.
    fn mark_profile_disabled(&self, uid: &Uid, disabled_by: &Uid) -> Result<Timestamp>;
}

pub trait SubcollectionRepo {
    fn add_document(&self, owner: &Uid, collection: &str, document: &Document) -> Result<()>;

    fn list_document_ids(&self, owner: &Uid, collection: &str) -> Result<Vec<DocumentId>>;

    /// Delete all given documents as a single batch.
    ///
    /// Either all documents are deleted or none of them.
    fn delete_documents(&self, owner: &Uid, collection: &str, ids: &[DocumentId])
        -> Result<usize>;
}
