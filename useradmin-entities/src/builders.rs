pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{account_builder::*, profile_builder::*};

pub mod account_builder {

    use super::*;
    use crate::{account::*, uid::*};

    #[derive(Debug)]
    pub struct AccountBuild {
        account: Account,
    }

    impl AccountBuild {
        pub fn uid(mut self, uid: &str) -> Self {
            self.account.uid = uid.parse().unwrap();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.account.email = Some(email.parse().unwrap());
            self
        }
        pub fn finish(self) -> Account {
            self.account
        }
    }

    impl Builder for Account {
        type Build = AccountBuild;
        fn build() -> AccountBuild {
            AccountBuild {
                account: Account {
                    uid: Uid::new(),
                    email: None,
                    disabled: false,
                },
            }
        }
    }
}

pub mod profile_builder {

    use super::*;
    use crate::{profile::*, uid::*};

    #[derive(Debug)]
    pub struct ProfileBuild {
        profile: Profile,
    }

    impl ProfileBuild {
        pub fn role(mut self, role: &str) -> Self {
            self.profile.role = role.into();
            self
        }
        pub fn finish(self) -> Profile {
            self.profile
        }
    }

    impl Builder for Profile {
        type Build = ProfileBuild;
        fn build() -> ProfileBuild {
            ProfileBuild {
                profile: Profile::new(Uid::new(), Role::new("user")),
            }
        }
    }
}
