//! The transfer operation: authenticated, type-checked, atomic.

use crate::bank::ledger::{Ledger, LedgerError};
use crate::bank::session::SessionGate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// The supported transfer kinds.
///
/// Transfer requests carry a raw tag (`"regular"`, `"international"`);
/// anything else fails to parse and the transfer is rejected before any
/// balance is read.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Regular,
    International,
}

impl TransferKind {
    /// The wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::International => "international",
        }
    }
}

/// Parse failure for a transfer kind tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized transfer kind '{0}'")]
pub struct UnknownKind(String);

impl FromStr for TransferKind {
    type Err = UnknownKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "regular" => Ok(Self::Regular),
            "international" => Ok(Self::International),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Accounts plus sessions behind one lock.
struct BankCore {
    ledger: Ledger,
    gate: SessionGate,
}

/// A minimal banking system: authenticated principals moving funds between
/// registered accounts.
///
/// All state sits behind a single mutex held from the first validation
/// step through the final commit, so two concurrent transfers can never
/// both pass the balance check against a stale balance.
///
/// Business rejections (unauthenticated sender, unsupported kind tag,
/// non-positive amount, insufficient funds) come back as `Ok(false)` with
/// both balances untouched. Referencing an account that was never opened
/// is a caller bug and comes back as `Err(LedgerError::UnknownAccount)`,
/// also with no mutation.
///
/// # Example
///
/// ```rust
/// use lockstep::bank::BankingSystem;
///
/// let bank = BankingSystem::new(|_, credential| credential == "pass123");
/// bank.open_account("user123", 1000).unwrap();
/// bank.open_account("receiver456", 500).unwrap();
///
/// assert!(bank.authenticate("user123", "pass123"));
///
/// let sent = bank
///     .transfer_money("user123", "receiver456", 100, "regular")
///     .unwrap();
/// assert!(sent);
/// assert_eq!(bank.balance("user123").unwrap(), 900);
/// assert_eq!(bank.balance("receiver456").unwrap(), 600);
/// ```
pub struct BankingSystem {
    core: Mutex<BankCore>,
}

impl BankingSystem {
    /// Create a bank with no accounts and the given credential predicate.
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            core: Mutex::new(BankCore {
                ledger: Ledger::new(),
                gate: SessionGate::new(verify),
            }),
        }
    }

    /// Open an account with an initial balance.
    pub fn open_account(&self, principal: &str, balance: i64) -> Result<(), LedgerError> {
        self.core().ledger.open(principal, balance)
    }

    /// Try to authenticate a principal with the configured predicate.
    pub fn authenticate(&self, principal: &str, credential: &str) -> bool {
        self.core().gate.authenticate(principal, credential)
    }

    /// Whether a principal currently holds an authenticated session.
    pub fn is_authenticated(&self, principal: &str) -> bool {
        self.core().gate.is_authenticated(principal)
    }

    /// Current balance of an account.
    pub fn balance(&self, principal: &str) -> Result<i64, LedgerError> {
        self.core().ledger.balance(principal)
    }

    /// Move `amount` from `sender` to `receiver`.
    ///
    /// Validation short-circuits on the first failed check, each returning
    /// `Ok(false)` with no mutation:
    ///
    /// 1. the sender must be authenticated;
    /// 2. `kind` must name a supported [`TransferKind`];
    /// 3. the amount must be positive;
    /// 4. the sender's balance must cover it (the exact balance counts as
    ///    covered).
    ///
    /// Both accounts must exist: an unknown sender or receiver is
    /// reported as an error before anything is debited. On success the
    /// debit and credit commit together under the lock and the result is
    /// `Ok(true)`.
    pub fn transfer_money(
        &self,
        sender: &str,
        receiver: &str,
        amount: i64,
        kind: &str,
    ) -> Result<bool, LedgerError> {
        let mut core = self.core();

        if !core.gate.is_authenticated(sender) {
            debug!("transfer rejected: sender '{sender}' is not authenticated");
            return Ok(false);
        }

        if kind.parse::<TransferKind>().is_err() {
            debug!("transfer rejected: unsupported kind tag '{kind}'");
            return Ok(false);
        }

        if amount <= 0 {
            debug!("transfer rejected: non-positive amount {amount}");
            return Ok(false);
        }

        // Both accounts must resolve before any mutation
        let sender_balance = core.ledger.balance(sender)?;
        core.ledger.balance(receiver)?;

        if sender_balance < amount {
            debug!(
                "transfer rejected: '{sender}' holds {sender_balance}, needs {amount}"
            );
            return Ok(false);
        }

        core.ledger.debit(sender, amount)?;
        core.ledger.credit(receiver, amount)?;
        debug!("transfer committed: {amount} from '{sender}' to '{receiver}'");
        Ok(true)
    }

    /// Lock the core, recovering from a poisoned lock.
    ///
    /// The core is plain data, valid after every operation, so a panic in
    /// another thread leaves nothing to repair.
    fn core(&self) -> MutexGuard<'_, BankCore> {
        match self.core.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
