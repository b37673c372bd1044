//! Durable per-user account records.
//!
//! The ledger store is a whole-record keyed mapping and nothing more:
//! no partial-field updates, no balance arithmetic. Interleaving control
//! lives with the account service's per-user locks.

use crate::errors::LedgerError;
use crate::types::{Account, UserId};
use async_trait::async_trait;
use dashmap::DashMap;
use rocksdb::{Options, DB};
use std::path::Path;
use std::sync::Arc;

const ACCOUNT_KEY_PREFIX: &str = "account:user:";

fn account_key(user_id: &UserId) -> Vec<u8> {
    format!("{}{}", ACCOUNT_KEY_PREFIX, user_id).into_bytes()
}

/// Keyed persistence port for account records.
///
/// `upsert` is atomic per key: a concurrent `get` observes either the old
/// record or the new one, never a partial write.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<Account>, LedgerError>;
    async fn upsert(&self, account: &Account) -> Result<(), LedgerError>;
}

/// RocksDB-backed production ledger. Records are stored as JSON so the
/// database stays inspectable with stock tooling.
#[derive(Clone)]
pub struct RocksLedgerStore {
    db: Arc<DB>,
}

impl RocksLedgerStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path).map_err(|e| LedgerError::OpenFailed(e.to_string()))?;
        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl LedgerStore for RocksLedgerStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<Account>, LedgerError> {
        let bytes = self
            .db
            .get(account_key(user_id))
            .map_err(|e| LedgerError::ReadFailed(e.to_string()))?;

        let Some(bytes) = bytes else {
            return Ok(None);
        };

        let account = serde_json::from_slice(&bytes).map_err(|e| LedgerError::CorruptedRecord {
            user_id: user_id.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(account))
    }

    async fn upsert(&self, account: &Account) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec(account).map_err(|e| {
            LedgerError::WriteFailed(format!(
                "failed to encode account for user {}: {}",
                account.user_id, e
            ))
        })?;

        self.db
            .put(account_key(&account.user_id), bytes)
            .map_err(|e| LedgerError::WriteFailed(e.to_string()))
    }
}

/// In-memory ledger for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryLedgerStore {
    accounts: DashMap<UserId, Account>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<Account>, LedgerError> {
        Ok(self.accounts.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, account: &Account) -> Result<(), LedgerError> {
        self.accounts.insert(account.user_id.clone(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryLedgerStore::new();
        let user = UserId::from("7");

        assert!(store.get(&user).await.unwrap().is_none());

        let mut account = Account::new(user.clone(), 15);
        account.last_bonus_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        store.upsert(&account).await.unwrap();

        let loaded = store.get(&user).await.unwrap().unwrap();
        assert_eq!(loaded, account);
    }

    #[tokio::test]
    async fn test_rocks_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = RocksLedgerStore::open(dir.path()).unwrap();
        let user = UserId::from("7");

        let mut account = Account::new(user.clone(), 15);
        account.display_name = Some("bob".to_string());
        store.upsert(&account).await.unwrap();

        let loaded = store.get(&user).await.unwrap().unwrap();
        assert_eq!(loaded, account);

        // Overwrite replaces the whole record.
        account.balance = 3;
        store.upsert(&account).await.unwrap();
        assert_eq!(store.get(&user).await.unwrap().unwrap().balance, 3);
    }

    #[tokio::test]
    async fn test_rocks_store_missing_user() {
        let dir = TempDir::new().unwrap();
        let store = RocksLedgerStore::open(dir.path()).unwrap();

        assert!(store.get(&UserId::from("absent")).await.unwrap().is_none());
    }
}
