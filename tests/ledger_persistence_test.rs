//! Verifies that account state survives closing and reopening the ledger.

use chrono::NaiveDate;
use dicehouse::{
    AccountService, CasinoConfig, FixedClock, FixedOutcomes, RocksLedgerStore, UserId, UserLocks,
    WagerEngine,
};
use std::sync::Arc;
use tempfile::TempDir;

fn open_service(
    dir: &TempDir,
    config: &CasinoConfig,
) -> (Arc<AccountService>, WagerEngine) {
    let store = Arc::new(RocksLedgerStore::open(dir.path()).expect("open ledger"));
    let accounts = Arc::new(AccountService::new(
        store,
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())),
        config.clone(),
        Arc::new(UserLocks::new()),
    ));
    // Forced winning die so the balance trajectory is deterministic.
    let engine = WagerEngine::new(
        Arc::clone(&accounts),
        Arc::new(FixedOutcomes::always(6)),
        config.clone(),
    );
    (accounts, engine)
}

#[tokio::test]
async fn test_balances_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = CasinoConfig::default();
    let user = UserId::from("42");

    // Phase 1: create the account, win a bet, claim the bonus, then drop
    // the store so RocksDB releases the directory.
    {
        let (accounts, engine) = open_service(&dir, &config);

        accounts.set_display_name(&user, "alice").await.unwrap();

        let settlement = engine.place_bet(&user, 5).await.unwrap();
        assert!(settlement.won);
        assert_eq!(settlement.new_balance, 25); // 15 - 5 + 10

        // Reference config pays a 0 daily bonus; the claim date must still
        // persist.
        assert_eq!(accounts.claim_daily_bonus(&user).await.unwrap(), 25);
    }

    // Phase 2: reopen and verify every persisted field.
    {
        let (accounts, engine) = open_service(&dir, &config);

        let account = accounts.get_or_create(&user).await.unwrap();
        assert_eq!(account.balance, 25);
        assert_eq!(account.display_name.as_deref(), Some("alice"));
        assert_eq!(
            account.last_bonus_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );

        // No second registration bonus, and the bonus gate still holds.
        assert!(accounts.claim_daily_bonus(&user).await.is_err());

        // The engine keeps working against the reopened ledger.
        let settlement = engine.place_bet(&user, 5).await.unwrap();
        assert_eq!(settlement.new_balance, 35);
    }
}

#[tokio::test]
async fn test_external_payment_persists() {
    let dir = TempDir::new().unwrap();
    let config = CasinoConfig::default();
    let user = UserId::from("7");

    {
        let (accounts, _) = open_service(&dir, &config);
        // Provider reports 200 minor units = 2 whole units at rate 1.
        assert_eq!(
            accounts.credit_external_payment(&user, 200).await.unwrap(),
            17
        );
    }

    {
        let (accounts, _) = open_service(&dir, &config);
        assert_eq!(accounts.balance_of(&user).await.unwrap(), 17);
    }
}
