//! The guarded transactional core: accounts, sessions, and transfers.
//!
//! Balances live in a [`Ledger`], authentication in a [`SessionGate`], and
//! the only operation that mutates two balances,
//! [`BankingSystem::transfer_money`], runs its full validate-and-commit
//! sequence inside one critical section, so no observer can see a debit
//! without its matching credit.
//!
//! Failed business checks (unauthenticated sender, unsupported transfer
//! kind, insufficient funds) are reported as `Ok(false)`, never as errors;
//! referencing an account that was never opened is a construction mistake
//! and fails loudly as [`LedgerError::UnknownAccount`].

mod ledger;
mod session;
mod system;

pub use ledger::{Account, Ledger, LedgerError};
pub use session::SessionGate;
pub use system::{BankingSystem, TransferKind, UnknownKind};
