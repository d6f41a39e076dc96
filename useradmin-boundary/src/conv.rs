use super::*;
use useradmin_entities as e;

impl From<e::account::Account> for DeleteUserResponse {
    fn from(from: e::account::Account) -> Self {
        let message = format!("User {} deleted successfully.", from.label());
        let e::account::Account { uid, email, .. } = from;
        Self {
            success: true,
            message,
            uid: uid.into(),
            email: email.map(e::email::EmailAddress::into_string),
        }
    }
}

impl From<e::uid::Uid> for DisableUserResponse {
    fn from(uid: e::uid::Uid) -> Self {
        Self {
            success: true,
            message: format!("User {uid} disabled successfully."),
        }
    }
}
