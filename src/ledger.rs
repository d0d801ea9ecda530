//! The in-memory ledger that owns the transaction sequence for a session.

use crate::{Error, transaction::Transaction};

/// The ordered collection of all transactions held for the current session.
///
/// Transactions are stored newest first: [Ledger::add] prepends, and readers
/// take the stored order as the display order with no sort step. Transaction
/// identity is positional, so deleting an entry shifts the indices of the
/// entries after it down by one.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Add `transaction` to the front of the ledger.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] if the description is empty after
    /// trimming, or [Error::ZeroAmount] if the amount is zero. The ledger is
    /// left unchanged in both cases.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), Error> {
        if transaction.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        if transaction.amount == 0 {
            return Err(Error::ZeroAmount);
        }

        self.entries.insert(0, transaction);

        Ok(())
    }

    /// Remove and return the transaction at `index`.
    ///
    /// The relative order of the remaining transactions is preserved.
    ///
    /// # Errors
    /// Returns [Error::DeleteOutOfRange] if `index` is not a valid position,
    /// leaving the ledger unchanged.
    pub fn delete(&mut self, index: usize) -> Result<Transaction, Error> {
        if index >= self.entries.len() {
            return Err(Error::DeleteOutOfRange(index));
        }

        Ok(self.entries.remove(index))
    }

    /// Discard the current sequence and install `transactions` verbatim.
    ///
    /// Used by backup import, which replaces rather than merges. The caller
    /// is responsible for having decoded `transactions` from a well-formed
    /// payload; nothing is re-validated, sorted or deduplicated here.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.entries = transactions;
    }

    /// A read-only view of the current ordered sequence.
    pub fn transactions(&self) -> &[Transaction] {
        &self.entries
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
