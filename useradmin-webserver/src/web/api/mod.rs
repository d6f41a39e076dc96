use std::result;

use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route,
};

use crate::adapters::json::{self, CallError, CallResult, ErrorCode};

mod error;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<CallResult<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![users::post_delete_user, users::post_disable_user]
}

fn call_result<T>(result: T) -> Result<T> {
    Ok(Json(CallResult { result }))
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    status: ErrorCode,
    message: String,
) -> response::Result<'o> {
    let http_status = Status::new(status.http_status());
    let boundary_error = CallError {
        error: json::Error { status, message },
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(http_status);
        res
    })
}
