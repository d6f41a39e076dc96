pub use useradmin_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Use case

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn delete_user(from: DeleteUserRequest) -> usecases::DeleteUser {
        let DeleteUserRequest {
            user_id,
            user_email,
        } = from;
        usecases::DeleteUser {
            user_id,
            user_email,
        }
    }

    pub fn disable_user(from: DisableUserRequest) -> usecases::DisableUser {
        let DisableUserRequest { user_id } = from;
        usecases::DisableUser { user_id }
    }
}

pub fn error_code(err: &usecases::Error) -> ErrorCode {
    use usecases::Error as E;
    match err {
        E::Unauthenticated => ErrorCode::Unauthenticated,
        E::PermissionDenied(_) => ErrorCode::PermissionDenied,
        E::InvalidArgument(_) => ErrorCode::InvalidArgument,
        E::NotFound(_) => ErrorCode::NotFound,
        E::Internal(_) => ErrorCode::Internal,
    }
}
