//! Dicehouse - wagering transaction engine for a virtual-currency dice casino.
//!
//! Holds per-user balances in a durable ledger, grants registration and
//! daily bonuses, credits external purchases, and settles dice wagers
//! atomically per user: validate the stake, debit it, draw an outcome,
//! apply the payout rule, credit winnings. Balances never go negative and
//! a debited stake is always resolved, under any interleaving of requests.
//!
//! The messaging/bot layer around this crate is expected to do nothing but
//! translate commands into these calls and format the returned settlements.

pub mod accounts;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod ledger;
pub mod locks;
pub mod outcome;
pub mod settlement;
pub mod telemetry;
pub mod types;

pub use accounts::AccountService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CasinoConfig, ConfigError};
pub use engine::WagerEngine;
pub use errors::{CasinoError, CasinoResult, LedgerError};
pub use factory::Casino;
pub use ledger::{LedgerStore, MemoryLedgerStore, RocksLedgerStore};
pub use locks::UserLocks;
pub use outcome::{FixedOutcomes, OutcomeSource, UniformDie};
pub use settlement::{Settlement, SettlementNotice};
pub use types::{Account, UserId};
