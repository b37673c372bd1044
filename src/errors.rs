//! Error types for the casino core.
//!
//! Validation and funds errors are typed results the messaging layer turns
//! into user-facing replies; ledger errors abort the operation with no
//! partial state change and are safe to retry (writes are whole-record
//! upserts).

use thiserror::Error;

/// Storage-layer failures surfaced by [`LedgerStore`](crate::ledger::LedgerStore)
/// implementations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger open failed: {0}")]
    OpenFailed(String),

    #[error("ledger read failed: {0}")]
    ReadFailed(String),

    #[error("ledger write failed: {0}")]
    WriteFailed(String),

    #[error("corrupted account record for user {user_id}: {reason}")]
    CorruptedRecord { user_id: String, reason: String },
}

/// Root error type for all casino operations.
#[derive(Debug, Error)]
pub enum CasinoError {
    /// Stake outside the configured inclusive bounds. Recoverable: the
    /// user corrects the amount.
    #[error("stake {stake} outside allowed range [{min}, {max}]")]
    InvalidStake { stake: u64, min: u64, max: u64 },

    /// Stake exceeds the current balance. Recoverable: the user reduces
    /// the stake or tops up.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: u64, requested: u64 },

    /// Daily bonus already granted for the given date.
    #[error("daily bonus already claimed for today")]
    AlreadyClaimed,

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A settlement task died before reporting back. Never produced in
    /// normal operation; indicates a panic inside the engine.
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type CasinoResult<T> = Result<T, CasinoError>;
