use crate::entities::Role;

pub const DEFAULT_PRIVILEGED_ROLE: &str = "chefProjet";

pub const DEFAULT_USER_SUBCOLLECTIONS: [&str; 3] = ["projets", "chantiers", "rapports"];

/// Business policy for administrating user accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    /// Only callers with exactly this role may administrate accounts.
    pub privileged_role: Role,
    /// Sub-collections of a profile that are purged together with the account.
    pub user_subcollections: Vec<String>,
    /// Require a privileged caller for disabling accounts.
    pub authorize_disable: bool,
}

impl AdminPolicy {
    pub fn is_privileged(&self, role: &Role) -> bool {
        &self.privileged_role == role
    }
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self {
            privileged_role: Role::new(DEFAULT_PRIVILEGED_ROLE),
            user_subcollections: DEFAULT_USER_SUBCOLLECTIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            authorize_disable: true,
        }
    }
}
