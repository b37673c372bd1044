//! Per-user critical section.
//!
//! All balance mutations for one user serialize on that user's mutex;
//! different users never contend. Entries are kept for the life of the
//! registry, matching accounts, which are never deleted.

use crate::types::UserId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry handing out one exclusive lock per user id.
#[derive(Default)]
pub struct UserLocks {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for one user, creating it on first use.
    ///
    /// The returned guard is owned so it can be held across await points
    /// for the whole debit-to-credit sequence of a wager.
    pub async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let entry = self
                .locks
                .entry(user_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())));
            Arc::clone(entry.value())
        };
        lock.lock_owned().await
    }
}
