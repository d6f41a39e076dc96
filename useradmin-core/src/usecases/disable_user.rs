use super::{non_empty, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct DisableUser {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledUser {
    pub uid: Uid,
    pub disabled_at: Timestamp,
    pub disabled_by: Uid,
}

/// Disable an account without deleting any data.
///
/// Unless the policy requires a privileged caller every failure
/// is reported as [`Error::Internal`].
pub fn disable_user<I, D>(
    identity: &I,
    store: &D,
    policy: &AdminPolicy,
    caller: Option<&Uid>,
    request: &DisableUser,
) -> Result<DisabledUser>
where
    I: IdentityRepo + ?Sized,
    D: DocumentStore + ?Sized,
{
    let caller = if policy.authorize_disable {
        super::authorize_privileged_caller(store, policy, caller)?.uid
    } else {
        // Without a caller there is nobody to record as `disabled_by`
        caller
            .cloned()
            .ok_or_else(|| Error::Internal("Missing caller identity".to_string()))?
    };
    let uid = non_empty(request.user_id.as_deref())
        .ok_or_else(|| Error::Internal(MissingArgument::UserId.to_string()))?
        .parse::<Uid>()
        .map_err(|err| Error::Internal(err.to_string()))?;

    identity.set_account_disabled(&uid, true)?;
    log::info!("Disabled account {uid}");

    let disabled_at = store.mark_profile_disabled(&uid, &caller)?;
    log::info!("Marked profile of {uid} as disabled by {caller}");

    Ok(DisabledUser {
        uid,
        disabled_at,
        disabled_by: caller,
    })
}
