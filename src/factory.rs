//! Wiring helpers for a fully assembled casino core.

use crate::accounts::AccountService;
use crate::clock::SystemClock;
use crate::config::CasinoConfig;
use crate::engine::WagerEngine;
use crate::errors::CasinoResult;
use crate::ledger::{LedgerStore, MemoryLedgerStore, RocksLedgerStore};
use crate::locks::UserLocks;
use crate::outcome::UniformDie;
use std::path::Path;
use std::sync::Arc;

/// Assembled core: account operations plus the wager engine, sharing one
/// ledger and one per-user lock registry. The messaging layer holds one of
/// these and translates commands into calls on it.
pub struct Casino {
    pub accounts: Arc<AccountService>,
    pub engine: WagerEngine,
}

impl Casino {
    /// Open (or create) a RocksDB-backed casino at `path`.
    pub fn open<P: AsRef<Path>>(path: P, config: CasinoConfig) -> CasinoResult<Self> {
        config.validate()?;
        let store = Arc::new(RocksLedgerStore::open(path)?);
        Ok(Self::with_store(store, config))
    }

    /// Ephemeral casino over the in-memory ledger.
    pub fn in_memory(config: CasinoConfig) -> Self {
        Self::with_store(Arc::new(MemoryLedgerStore::new()), config)
    }

    /// Assemble over an arbitrary ledger implementation.
    pub fn with_store(store: Arc<dyn LedgerStore>, config: CasinoConfig) -> Self {
        let locks = Arc::new(UserLocks::new());
        let accounts = Arc::new(AccountService::new(
            store,
            Arc::new(SystemClock),
            config.clone(),
            locks,
        ));
        let die = Arc::new(UniformDie::new(config.die_sides));
        let engine = WagerEngine::new(Arc::clone(&accounts), die, config);
        Self { accounts, engine }
    }
}
