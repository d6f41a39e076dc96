use std::cell::RefCell;

use anyhow::anyhow;

use crate::{entities::*, repositories::*};

pub mod prelude {
    pub use super::{MockDb, MOCK_FAILURE};
    pub use crate::{
        db::*,
        entities::*,
        policy::*,
        repositories::{Error as RepoError, *},
        usecases::{self, Denial, Error, MissingArgument, TargetKey},
    };
    pub use useradmin_entities::builders::*;
}

type RepoResult<T> = std::result::Result<T, Error>;

pub const MOCK_FAILURE: &str = "mock failure";

/// In-memory stand-in for both the identity provider and the document store.
///
/// Every call through one of the repository traits is recorded by name.
#[derive(Default)]
pub struct MockDb {
    pub accounts: RefCell<Vec<Account>>,
    pub profiles: RefCell<Vec<Profile>>,
    pub documents: RefCell<Vec<(Uid, String, Document)>>,
    calls: RefCell<Vec<&'static str>>,
    failing: RefCell<Vec<&'static str>>,
}

impl MockDb {
    /// Add an account together with its profile.
    pub fn add_user(&self, account: Account, role: &str) -> Uid {
        let uid = account.uid.clone();
        self.accounts.borrow_mut().push(account);
        self.profiles
            .borrow_mut()
            .push(Profile::new(uid.clone(), role.into()));
        uid
    }

    pub fn add_profile(&self, profile: Profile) -> Uid {
        let uid = profile.uid.clone();
        self.profiles.borrow_mut().push(profile);
        uid
    }

    pub fn add_documents(&self, owner: &Uid, collection: &str, count: usize) {
        let mut documents = self.documents.borrow_mut();
        for i in 0..count {
            let document = Document {
                id: DocumentId::new(),
                content: format!(r#"{{"n":{i}}}"#),
            };
            documents.push((owner.clone(), collection.to_owned(), document));
        }
    }

    pub fn try_get_account(&self, uid: &Uid) -> Option<Account> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| &a.uid == uid)
            .cloned()
    }

    pub fn count_documents(&self, owner: &Uid) -> usize {
        self.documents
            .borrow()
            .iter()
            .filter(|(o, _, _)| o == owner)
            .count()
    }

    /// Let all subsequent calls of the named repository function fail.
    pub fn fail_on(&self, call: &'static str) {
        self.failing.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: &'static str) -> RepoResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&call) {
            return Err(Error::Other(anyhow!(MOCK_FAILURE)));
        }
        Ok(())
    }
}

impl IdentityRepo for MockDb {
    fn create_account(&self, account: &Account) -> RepoResult<()> {
        self.record("create_account")?;
        if self.try_get_account(&account.uid).is_some() {
            return Err(Error::AlreadyExists);
        }
        self.accounts.borrow_mut().push(account.clone());
        Ok(())
    }

    fn get_account(&self, uid: &Uid) -> RepoResult<Account> {
        self.record("get_account")?;
        self.try_get_account(uid).ok_or(Error::NotFound)
    }

    fn get_account_by_email(&self, email: &EmailAddress) -> RepoResult<Account> {
        self.record("get_account_by_email")?;
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.email.as_ref().map(EmailAddress::as_str) == Some(email.as_str()))
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn delete_account(&self, uid: &Uid) -> RepoResult<()> {
        self.record("delete_account")?;
        let mut accounts = self.accounts.borrow_mut();
        let len = accounts.len();
        accounts.retain(|a| &a.uid != uid);
        if accounts.len() == len {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn set_account_disabled(&self, uid: &Uid, disabled: bool) -> RepoResult<()> {
        self.record("set_account_disabled")?;
        let mut accounts = self.accounts.borrow_mut();
        let account = accounts
            .iter_mut()
            .find(|a| &a.uid == uid)
            .ok_or(Error::NotFound)?;
        account.disabled = disabled;
        Ok(())
    }
}

impl ProfileRepo for MockDb {
    fn create_profile(&self, profile: &Profile) -> RepoResult<()> {
        self.record("create_profile")?;
        if self.profiles.borrow().iter().any(|p| p.uid == profile.uid) {
            return Err(Error::AlreadyExists);
        }
        self.profiles.borrow_mut().push(profile.clone());
        Ok(())
    }

    fn get_profile(&self, uid: &Uid) -> RepoResult<Profile> {
        self.record("get_profile")?;
        self.profiles
            .borrow()
            .iter()
            .find(|p| &p.uid == uid)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn try_get_profile(&self, uid: &Uid) -> RepoResult<Option<Profile>> {
        self.record("try_get_profile")?;
        Ok(self
            .profiles
            .borrow()
            .iter()
            .find(|p| &p.uid == uid)
            .cloned())
    }

    fn delete_profile(&self, uid: &Uid) -> RepoResult<()> {
        self.record("delete_profile")?;
        self.profiles.borrow_mut().retain(|p| &p.uid != uid);
        Ok(())
    }

    fn mark_profile_disabled(&self, uid: &Uid, disabled_by: &Uid) -> RepoResult<Timestamp> {
        self.record("mark_profile_disabled")?;
        let mut profiles = self.profiles.borrow_mut();
        let profile = profiles
            .iter_mut()
            .find(|p| &p.uid == uid)
            .ok_or(Error::NotFound)?;
        let now = Timestamp::now();
        profile.status = ProfileStatus::Disabled;
        profile.disabled_at = Some(now);
        profile.disabled_by = Some(disabled_by.clone());
        Ok(now)
    }
}

impl SubcollectionRepo for MockDb {
    fn add_document(&self, owner: &Uid, collection: &str, document: &Document) -> RepoResult<()> {
        self.record("add_document")?;
        self.documents
            .borrow_mut()
            .push((owner.clone(), collection.to_owned(), document.clone()));
        Ok(())
    }

    fn list_document_ids(&self, owner: &Uid, collection: &str) -> RepoResult<Vec<DocumentId>> {
        self.record("list_document_ids")?;
        Ok(self
            .documents
            .borrow()
            .iter()
            .filter(|(o, c, _)| o == owner && c == collection)
            .map(|(_, _, d)| d.id.clone())
            .collect())
    }

    fn delete_documents(
        &self,
        owner: &Uid,
        collection: &str,
        ids: &[DocumentId],
    ) -> RepoResult<usize> {
        self.record("delete_documents")?;
        let mut documents = self.documents.borrow_mut();
        let len = documents.len();
        documents.retain(|(o, c, d)| !(o == owner && c == collection && ids.contains(&d.id)));
        Ok(len - documents.len())
    }
}
