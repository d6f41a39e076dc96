mod authorize;
mod delete_user;
mod disable_user;
mod error;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*,
    delete_user::*,
    disable_user::*,
    error::{Denial, Error, MissingArgument, TargetKey},
};

mod prelude {
    pub use super::error::{Denial, Error, MissingArgument, TargetKey};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, policy::AdminPolicy, repositories::*};
}

// Empty strings count as missing, both for ids and email addresses.
fn non_empty(arg: Option<&str>) -> Option<&str> {
    arg.filter(|s| !s.is_empty())
}
