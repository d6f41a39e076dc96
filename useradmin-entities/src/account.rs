use crate::{email::EmailAddress, uid::Uid};

/// The record of an account at the identity provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub uid      : Uid,
    pub email    : Option<EmailAddress>,
    pub disabled : bool,
}

impl Account {
    /// A human readable label, preferably the email address.
    pub fn label(&self) -> &str {
        self.email
            .as_ref()
            .map(EmailAddress::as_str)
            .unwrap_or_else(|| self.uid.as_str())
    }
}
