//! Loan management service

use crate::models::{BorrowOutcome, LoanEntry, ReturnOutcome};

use super::SharedCatalog;

#[derive(Clone)]
pub struct LoansService {
    catalog: SharedCatalog,
}

impl LoansService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Lend a copy of record `id` to `user`
    pub async fn borrow(&self, user: &str, id: &str) -> BorrowOutcome {
        let mut catalog = self.catalog.lock().await;
        let previous = catalog.loan_of(user).map(str::to_owned);
        let outcome = catalog.borrow(user, id);

        match outcome {
            BorrowOutcome::Success => {
                if let Some(previous) = previous {
                    tracing::warn!(
                        "User {:?} borrowed {} while still holding {:?}; earlier loan dropped from ledger",
                        user,
                        id,
                        previous
                    );
                }
                tracing::info!("Loan created: user={:?} id={}", user, id);
            }
            BorrowOutcome::Unavailable => {
                tracing::info!("Loan refused: no copy of {} available", id)
            }
            BorrowOutcome::NotFound => tracing::info!("Loan refused: unknown id {}", id),
        }
        outcome
    }

    /// Take back the book `user` holds
    pub async fn return_book(&self, user: &str) -> ReturnOutcome {
        let outcome = self.catalog.lock().await.return_book(user);
        match outcome {
            ReturnOutcome::Success => tracing::info!("Loan returned: user={:?}", user),
            ReturnOutcome::NoRecord => tracing::debug!("No loan on record for user={:?}", user),
        }
        outcome
    }

    pub async fn count_loans(&self) -> usize {
        self.catalog.lock().await.loan_count()
    }

    /// Current ledger entries
    pub async fn list_loans(&self) -> Vec<LoanEntry> {
        self.catalog.lock().await.loans()
    }
}
