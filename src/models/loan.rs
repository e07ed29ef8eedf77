//! Loan (borrow) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Result of a borrow attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BorrowOutcome {
    Success,
    /// The record exists but has no copy left
    Unavailable,
    /// No record carries that id
    NotFound,
}

/// Result of a return attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReturnOutcome {
    Success,
    /// The user holds nothing according to the ledger
    NoRecord,
}

/// One ledger entry: who holds which title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanEntry {
    pub user: String,
    pub title: String,
}

/// Borrow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    /// Borrower name
    #[validate(length(min = 1, message = "User name is required"))]
    pub user: String,
    /// Book identifier. Empty ids are legal, as on record creation.
    pub id: String,
}

/// Return request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReturnLoan {
    /// Borrower name
    #[validate(length(min = 1, message = "User name is required"))]
    pub user: String,
}
