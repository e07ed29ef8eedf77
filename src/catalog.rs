//! In-memory catalog and lending ledger
//!
//! Records are kept in insertion order and searched linearly. The ledger maps
//! each borrower to the title of the one book they currently hold.

use std::collections::HashMap;

use crate::models::{BorrowOutcome, LoanEntry, Record, ReturnOutcome};

#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Record>,
    loans: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate ids are accepted.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
        total_copies: i64,
    ) -> &Record {
        self.records.push(Record::new(title, author, id, total_copies));
        &self.records[self.records.len() - 1]
    }

    /// Case-insensitive substring search on titles
    pub fn search_by_title(&self, query: &str) -> Vec<&Record> {
        self.search(query, |record| record.title.as_str())
    }

    /// Case-insensitive substring search on authors
    pub fn search_by_author(&self, query: &str) -> Vec<&Record> {
        self.search(query, |record| record.author.as_str())
    }

    fn search<'a, F>(&'a self, query: &str, field: F) -> Vec<&'a Record>
    where
        F: Fn(&'a Record) -> &'a str,
    {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| field(*record).to_lowercase().contains(&needle))
            .collect()
    }

    /// Lend one copy of the first record carrying `id`.
    ///
    /// On success the ledger entry for `user` is overwritten even if they
    /// already hold a book; the earlier book's copy is not put back.
    pub fn borrow(&mut self, user: &str, id: &str) -> BorrowOutcome {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return BorrowOutcome::NotFound;
        };

        if !record.is_available() {
            return BorrowOutcome::Unavailable;
        }

        record.available_copies -= 1;
        self.loans.insert(user.to_string(), record.title.clone());
        BorrowOutcome::Success
    }

    /// Take back whatever `user` holds.
    ///
    /// The ledger entry is dropped before the catalog is scanned, so the
    /// outcome is `Success` even when no record matches the stored title.
    /// The first record with that title is credited, whichever copy was lent.
    pub fn return_book(&mut self, user: &str) -> ReturnOutcome {
        let Some(title) = self.loans.remove(user) else {
            return ReturnOutcome::NoRecord;
        };

        if let Some(record) = self.records.iter_mut().find(|r| r.title == title) {
            record.available_copies = record.available_copies.saturating_add(1);
        }
        ReturnOutcome::Success
    }

    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// Title currently held by `user`, if any
    pub fn loan_of(&self, user: &str) -> Option<&str> {
        self.loans.get(user).map(String::as_str)
    }

    /// Snapshot of the ledger, sorted by user for stable output
    pub fn loans(&self) -> Vec<LoanEntry> {
        let mut entries: Vec<LoanEntry> = self
            .loans
            .iter()
            .map(|(user, title)| LoanEntry {
                user: user.clone(),
                title: title.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.user.cmp(&b.user));
        entries
    }

    /// Number of users currently holding a book
    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
