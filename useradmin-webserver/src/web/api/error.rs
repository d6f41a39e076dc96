use rocket::{
    self,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use crate::{
    adapters::json::{error_code, ErrorCode},
    core::usecases,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] usecases::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::InvalidRequest(err.to_string()),
            JsonError::Parse(_str, err) => Self::InvalidRequest(err.to_string()),
        }
    }
}

impl Error {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Usecase(err) => error_code(err),
            Self::InvalidRequest(_) => ErrorCode::InvalidArgument,
            Self::Other(_) => ErrorCode::Internal,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let code = self.code();
        match code {
            ErrorCode::Internal => error!("{} {}: {self}", req.method(), req.uri()),
            _ => warn!("{} {} rejected: {self}", req.method(), req.uri()),
        }
        json_error_response(req, code, self.to_string())
    }
}
