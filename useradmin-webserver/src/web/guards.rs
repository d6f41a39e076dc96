use rocket::{
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{core::entities::Uid, web::jwt};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The verified identity of the caller, if any.
///
/// Never fails: requests without a valid token are
/// rejected by the use cases that require a caller.
#[derive(Debug)]
pub struct Caller(Option<Uid>);

impl Caller {
    pub fn uid(&self) -> Option<&Uid> {
        self.0.as_ref()
    }

    fn bearer_tokens_from_header<'r>(request: &'r Request<'_>) -> Vec<&'r str> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Caller {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        if bearer_tokens.is_empty() {
            return Outcome::Success(Self(None));
        }
        let Outcome::Success(jwt_state) = request.guard::<&State<jwt::JwtState>>().await else {
            error!("Missing JWT state");
            return Outcome::Success(Self(None));
        };
        let uid = bearer_tokens
            .into_iter()
            .filter_map(|token| {
                jwt_state
                    .validate_token_and_get_uid(token)
                    .inspect_err(|err| debug!("Rejected bearer token: {err}"))
                    .ok()
            })
            .next();
        Outcome::Success(Self(uid))
    }
}
