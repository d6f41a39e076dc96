use crate::repositories::*;

/// The document database that holds the profile documents
/// and their named sub-collections.
pub trait DocumentStore: ProfileRepo + SubcollectionRepo {}

impl<T> DocumentStore for T where T: ProfileRepo + SubcollectionRepo {}
