use super::{non_empty, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct DeleteUser {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgedSubcollection {
    pub name: String,
    pub deleted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedUser {
    pub account: Account,
    pub purged: Vec<PurgedSubcollection>,
}

/// Permanently delete an account, its profile and its sub-collections.
///
/// The steps are executed in a fixed order and nothing is rolled
/// back: if a step fails after the account has been deleted the
/// remaining data stays in the store.
pub fn delete_user<I, D>(
    identity: &I,
    store: &D,
    policy: &AdminPolicy,
    caller: Option<&Uid>,
    request: &DeleteUser,
) -> Result<DeletedUser>
where
    I: IdentityRepo + ?Sized,
    D: DocumentStore + ?Sized,
{
    super::authorize_privileged_caller(store, policy, caller)?;

    let account = resolve_target(identity, request)?;
    let uid = &account.uid;

    identity.delete_account(uid)?;
    log::info!("Deleted account {}", account.label());

    store.delete_profile(uid)?;
    log::info!("Deleted profile of {}", account.label());

    let mut purged = Vec::with_capacity(policy.user_subcollections.len());
    for name in &policy.user_subcollections {
        let ids = store.list_document_ids(uid, name)?;
        if ids.is_empty() {
            continue;
        }
        let deleted = store.delete_documents(uid, name, &ids)?;
        log::info!(
            "Deleted {deleted} document(s) of sub-collection '{name}' of {}",
            account.label()
        );
        purged.push(PurgedSubcollection {
            name: name.clone(),
            deleted,
        });
    }

    Ok(DeletedUser { account, purged })
}

// The id takes precedence if both keys are given.
fn resolve_target<I>(identity: &I, request: &DeleteUser) -> Result<Account>
where
    I: IdentityRepo + ?Sized,
{
    if let Some(user_id) = non_empty(request.user_id.as_deref()) {
        let key = TargetKey::Uid(user_id.to_owned());
        let uid = user_id.parse::<Uid>().map_err(|err| {
            log::debug!("Invalid user id '{user_id}': {err}");
            Error::NotFound(key.clone())
        })?;
        return identity.get_account(&uid).map_err(|err| {
            log::debug!("Failed to find account by id {uid}: {err}");
            Error::NotFound(key)
        });
    }
    if let Some(user_email) = non_empty(request.user_email.as_deref()) {
        let key = TargetKey::Email(user_email.to_owned());
        let email = user_email.parse::<EmailAddress>().map_err(|err| {
            log::debug!("Invalid email address '{user_email}': {err}");
            Error::NotFound(key.clone())
        })?;
        return identity.get_account_by_email(&email).map_err(|err| {
            log::debug!("Failed to find account by email {email}: {err}");
            Error::NotFound(key)
        });
    }
    Err(Error::InvalidArgument(MissingArgument::UserIdOrEmail))
}
