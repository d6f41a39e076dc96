pub use useradmin_core::{db, policy, repositories, usecases};

pub mod entities {
    pub use useradmin_core::entities::*;
    #[cfg(test)]
    pub use useradmin_entities::builders::*;
}

pub mod prelude {
    pub use super::{db::*, entities::*, policy::*, repositories::*};
}
