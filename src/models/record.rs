//! Record (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Upper bound on copies accepted through the API; matches the `range`
/// check on `CreateRecord::total_copies`
pub const MAX_COPIES: i64 = 1_000_000;

/// One catalog entry.
///
/// Identity fields never change once the record is in the catalog;
/// `available_copies` moves with borrows and returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    pub title: String,
    pub author: String,
    /// Caller-supplied identifier, not guaranteed unique
    pub id: String,
    pub total_copies: i64,
    pub available_copies: i64,
}

impl Record {
    /// Build a record with every copy on the shelf.
    ///
    /// No validation: a non-positive `total_copies` yields a record that can
    /// never be borrowed.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
        total_copies: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id: id.into(),
            total_copies,
            available_copies: total_copies,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {}/{}",
            self.title, self.author, self.available_copies, self.total_copies
        )
    }
}

/// Create record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRecord {
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Book identifier
    pub id: String,
    /// Total copies held (1 to 1,000,000)
    #[validate(range(min = 1, max = 1000000, message = "Total copies must be between 1 and 1000000"))]
    pub total_copies: i64,
}

/// Search query parameters. Exactly one of `title` or `author` is expected.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecordQuery {
    pub title: Option<String>,
    pub author: Option<String>,
}
