//! Data models for the digital library

pub mod loan;
pub mod record;

// Re-export commonly used types
pub use loan::{BorrowOutcome, LoanEntry, ReturnOutcome};
pub use record::Record;
