use super::prelude::*;

/// Check that the caller is signed in and holds the privileged role.
///
/// Returns the caller's profile.
pub fn authorize_privileged_caller<R>(
    repo: &R,
    policy: &AdminPolicy,
    caller: Option<&Uid>,
) -> Result<Profile>
where
    R: ProfileRepo + ?Sized,
{
    let Some(caller) = caller else {
        return Err(Error::Unauthenticated);
    };
    let Some(profile) = repo.try_get_profile(caller)? else {
        log::warn!("Rejected caller {caller} without a profile");
        return Err(Error::PermissionDenied(Denial::UnknownCaller));
    };
    if !policy.is_privileged(&profile.role) {
        log::warn!(
            "Rejected caller {caller} with insufficient role '{}'",
            profile.role
        );
        return Err(Error::PermissionDenied(Denial::InsufficientRole));
    }
    Ok(profile)
}
