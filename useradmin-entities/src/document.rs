use std::fmt;

use uuid::Uuid;

/// Identifier of a document within a collection.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new() -> Self {
        Uuid::new_v4().as_simple().to_string().into()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for DocumentId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for DocumentId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<DocumentId> for String {
    fn from(from: DocumentId) -> Self {
        from.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

/// A document stored in one of the sub-collections of a user profile.
///
/// The content is opaque and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub content: String,
}
