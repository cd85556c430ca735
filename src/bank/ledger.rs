//! Account records and balance arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by ledger operations.
///
/// `UnknownAccount` and `DuplicateAccount` indicate caller mistakes and are
/// meant to propagate; `Overdrawn` exists so a debit can refuse without
/// mutating, and is normally absorbed by the transfer path's prior balance
/// check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no account registered for principal '{0}'")]
    UnknownAccount(String),

    #[error("an account for principal '{0}' already exists")]
    DuplicateAccount(String),

    #[error("debit of {amount} would overdraw account '{principal}' (balance: {balance})")]
    Overdrawn {
        principal: String,
        amount: i64,
        balance: i64,
    },
}

/// One principal's account: an identity and a balance.
///
/// Accounts are created with an initial balance and mutated only through
/// [`Ledger::credit`] and [`Ledger::debit`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    principal: String,
    balance: i64,
}

impl Account {
    /// The owning principal's identifier.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }
}

/// All accounts, keyed by principal.
///
/// The ledger holds no locking of its own: callers that share one across
/// threads serialize access around it (see
/// [`crate::bank::BankingSystem`]).
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an account with an initial balance.
    pub fn open(&mut self, principal: &str, balance: i64) -> Result<(), LedgerError> {
        if self.accounts.contains_key(principal) {
            return Err(LedgerError::DuplicateAccount(principal.to_string()));
        }
        self.accounts.insert(
            principal.to_string(),
            Account {
                principal: principal.to_string(),
                balance,
            },
        );
        Ok(())
    }

    /// Look up an account.
    pub fn get(&self, principal: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .get(principal)
            .ok_or_else(|| LedgerError::UnknownAccount(principal.to_string()))
    }

    /// Current balance of an account.
    pub fn balance(&self, principal: &str) -> Result<i64, LedgerError> {
        self.get(principal).map(Account::balance)
    }

    /// Add to an account's balance.
    pub fn credit(&mut self, principal: &str, amount: i64) -> Result<(), LedgerError> {
        let account = self.account_mut(principal)?;
        account.balance += amount;
        Ok(())
    }

    /// Subtract from an account's balance.
    ///
    /// Refuses with [`LedgerError::Overdrawn`], mutating nothing, if the
    /// debit would take the balance below zero. Debiting the exact balance
    /// is allowed and leaves the account at zero.
    pub fn debit(&mut self, principal: &str, amount: i64) -> Result<(), LedgerError> {
        let account = self.account_mut(principal)?;
        if account.balance < amount {
            return Err(LedgerError::Overdrawn {
                principal: principal.to_string(),
                amount,
                balance: account.balance,
            });
        }
        account.balance -= amount;
        Ok(())
    }

    fn account_mut(&mut self, principal: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(principal)
            .ok_or_else(|| LedgerError::UnknownAccount(principal.to_string()))
    }
}
