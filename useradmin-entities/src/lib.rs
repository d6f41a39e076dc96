#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # useradmin-entities
//!
//! Reusable, agnostic domain entities for the user administration service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod document;
pub mod email;
pub mod profile;
pub mod time;
pub mod uid;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
