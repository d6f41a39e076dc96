use rocket::{post, State};

use super::*;
use crate::{
    adapters::json::from_json,
    core::{policy::AdminPolicy, usecases},
    web::{guards::Caller, sqlite},
};

#[post("/deleteUser", data = "<request>")]
pub fn post_delete_user(
    db: sqlite::Connections,
    policy: &State<AdminPolicy>,
    caller: Caller,
    request: JsonResult<json::CallRequest<json::DeleteUserRequest>>,
) -> Result<json::DeleteUserResponse> {
    let request = from_json::delete_user(request?.into_inner().data);
    let db = db.exclusive()?;
    let deleted = usecases::delete_user(&db, &db, policy, caller.uid(), &request)?;
    call_result(deleted.account.into())
}

#[post("/disableUser", data = "<request>")]
pub fn post_disable_user(
    db: sqlite::Connections,
    policy: &State<AdminPolicy>,
    caller: Caller,
    request: JsonResult<json::CallRequest<json::DisableUserRequest>>,
) -> Result<json::DisableUserResponse> {
    let request = from_json::disable_user(request?.into_inner().data);
    let db = db.exclusive()?;
    let disabled = usecases::disable_user(&db, &db, policy, caller.uid(), &request)?;
    call_result(disabled.uid.into())
}
