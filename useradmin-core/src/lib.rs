//! # useradmin-core
//!
//! Business rules of the user administration service:
//! who may delete or disable an account and in which
//! order the collaborators are called.

pub mod db;
pub mod policy;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use useradmin_entities::{
        account::*, document::*, email::*, profile::*, time::*, uid::*,
    };
}
