//! Account lifecycle and balance mutation over the ledger store.
//!
//! Every public operation runs inside the user's critical section, so a
//! read-modify-write of one balance never interleaves with another. The
//! `*_locked` variants exist for the wager engine, which holds the lock
//! itself across a multi-step debit/credit sequence.

use crate::clock::Clock;
use crate::config::CasinoConfig;
use crate::errors::{CasinoError, CasinoResult};
use crate::ledger::LedgerStore;
use crate::locks::UserLocks;
use crate::types::{Account, UserId};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info};

pub struct AccountService {
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn Clock>,
    config: CasinoConfig,
    locks: Arc<UserLocks>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        clock: Arc<dyn Clock>,
        config: CasinoConfig,
        locks: Arc<UserLocks>,
    ) -> Self {
        Self {
            store,
            clock,
            config,
            locks,
        }
    }

    /// Take the user's exclusive lock for a multi-step transaction.
    pub(crate) async fn lock_user(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        self.locks.acquire(user_id).await
    }

    /// Return the user's account, creating it with the registration bonus
    /// on first access. Concurrent first-time callers are serialized by the
    /// user lock, so exactly one record is created and one bonus granted.
    pub async fn get_or_create(&self, user_id: &UserId) -> CasinoResult<Account> {
        let _guard = self.lock_user(user_id).await;
        self.get_or_create_locked(user_id).await
    }

    pub(crate) async fn get_or_create_locked(&self, user_id: &UserId) -> CasinoResult<Account> {
        if let Some(account) = self.store.get(user_id).await? {
            return Ok(account);
        }

        let account = Account::new(user_id.clone(), self.config.registration_bonus);
        self.store.upsert(&account).await?;
        info!(user = %user_id, balance = account.balance, "account created with registration bonus");
        Ok(account)
    }

    /// Current balance, creating the account on first access.
    pub async fn balance_of(&self, user_id: &UserId) -> CasinoResult<u64> {
        self.get_or_create(user_id).await.map(|account| account.balance)
    }

    /// Record the user's display name if none is stored yet. Informational
    /// only; settlement logic never reads it.
    pub async fn set_display_name(&self, user_id: &UserId, name: &str) -> CasinoResult<()> {
        let _guard = self.lock_user(user_id).await;
        let mut account = self.get_or_create_locked(user_id).await?;

        if account.display_name.is_none() && !name.is_empty() {
            account.display_name = Some(name.to_string());
            self.store.upsert(&account).await?;
        }
        Ok(())
    }

    /// Remove `amount` from the balance, failing without any state change
    /// if it exceeds the balance.
    pub async fn debit(&self, user_id: &UserId, amount: u64) -> CasinoResult<u64> {
        let _guard = self.lock_user(user_id).await;
        self.debit_locked(user_id, amount).await
    }

    pub(crate) async fn debit_locked(&self, user_id: &UserId, amount: u64) -> CasinoResult<u64> {
        let mut account = self.get_or_create_locked(user_id).await?;

        if amount > account.balance {
            return Err(CasinoError::InsufficientFunds {
                balance: account.balance,
                requested: amount,
            });
        }

        account.balance -= amount;
        self.store.upsert(&account).await?;
        debug!(user = %user_id, amount, balance = account.balance, "debit applied");
        Ok(account.balance)
    }

    /// Add `amount` to the balance. Zero is a valid amount: crediting 0 is
    /// how a lost wager records its resolution.
    pub async fn credit(&self, user_id: &UserId, amount: u64) -> CasinoResult<u64> {
        let _guard = self.lock_user(user_id).await;
        self.credit_locked(user_id, amount).await
    }

    pub(crate) async fn credit_locked(&self, user_id: &UserId, amount: u64) -> CasinoResult<u64> {
        let mut account = self.get_or_create_locked(user_id).await?;

        account.balance = account.balance.saturating_add(amount);
        self.store.upsert(&account).await?;
        debug!(user = %user_id, amount, balance = account.balance, "credit applied");
        Ok(account.balance)
    }

    /// Claim the daily bonus against the injected clock's current date.
    pub async fn claim_daily_bonus(&self, user_id: &UserId) -> CasinoResult<u64> {
        let today = self.clock.today();
        self.claim_daily_bonus_on(user_id, today).await
    }

    /// Claim the daily bonus for an explicit date. Fails with
    /// [`CasinoError::AlreadyClaimed`] when the stored claim date matches;
    /// otherwise credits the configured amount (possibly 0) and records the
    /// date.
    pub async fn claim_daily_bonus_on(&self, user_id: &UserId, today: NaiveDate) -> CasinoResult<u64> {
        let _guard = self.lock_user(user_id).await;
        let mut account = self.get_or_create_locked(user_id).await?;

        if account.last_bonus_date == Some(today) {
            return Err(CasinoError::AlreadyClaimed);
        }

        account.balance = account.balance.saturating_add(self.config.daily_bonus);
        account.last_bonus_date = Some(today);
        self.store.upsert(&account).await?;
        info!(user = %user_id, bonus = self.config.daily_bonus, balance = account.balance, "daily bonus claimed");
        Ok(account.balance)
    }

    /// Credit a completed external purchase reported by the payment
    /// provider, converting its minor-unit charge into coins.
    pub async fn credit_external_payment(
        &self,
        user_id: &UserId,
        total_minor_units: u64,
    ) -> CasinoResult<u64> {
        let coins = self.config.coins_for_payment(total_minor_units);

        let _guard = self.lock_user(user_id).await;
        let mut account = self.get_or_create_locked(user_id).await?;
        account.balance = account.balance.saturating_add(coins);
        self.store.upsert(&account).await?;
        info!(
            user = %user_id,
            minor_units = total_minor_units,
            coins,
            balance = account.balance,
            "external payment credited"
        );
        Ok(account.balance)
    }
}
