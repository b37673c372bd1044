//! Wager engine: one complete bet-to-settlement transaction.
//!
//! `place_bet` validates the stake, then runs debit -> draw -> credit as a
//! single unit inside the user's critical section. The debited-but-
//! unresolved intermediate state is never visible as spendable balance to
//! another wager from the same user.

use crate::accounts::AccountService;
use crate::config::CasinoConfig;
use crate::errors::{CasinoError, CasinoResult};
use crate::outcome::OutcomeSource;
use crate::settlement::Settlement;
use crate::types::UserId;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct WagerEngine {
    accounts: Arc<AccountService>,
    outcome: Arc<dyn OutcomeSource>,
    config: CasinoConfig,
}

impl WagerEngine {
    pub fn new(
        accounts: Arc<AccountService>,
        outcome: Arc<dyn OutcomeSource>,
        config: CasinoConfig,
    ) -> Self {
        Self {
            accounts,
            outcome,
            config,
        }
    }

    /// Place one wager and settle it.
    ///
    /// Validates the inclusive stake bounds independently of any caller-side
    /// checks, then settles in a spawned task: once the stake is debited the
    /// wager always resolves, even if the caller stops awaiting the result.
    pub async fn place_bet(&self, user_id: &UserId, stake: u64) -> CasinoResult<Settlement> {
        if stake < self.config.min_bet || stake > self.config.max_bet {
            return Err(CasinoError::InvalidStake {
                stake,
                min: self.config.min_bet,
                max: self.config.max_bet,
            });
        }

        let engine = self.clone();
        let user_id = user_id.clone();
        let settled = tokio::spawn(async move { engine.settle(user_id, stake).await });

        settled
            .await
            .map_err(|e| CasinoError::Internal(format!("settlement task aborted: {e}")))?
    }

    async fn settle(&self, user_id: UserId, stake: u64) -> CasinoResult<Settlement> {
        let wager_id = Uuid::new_v4();
        let _guard = self.accounts.lock_user(&user_id).await;

        // Aborts with no state change on insufficient funds; creates the
        // account with the registration bonus on a first-ever bet.
        self.accounts.debit_locked(&user_id, stake).await?;

        let outcome_value = self.outcome.draw();
        let won = self.config.winning_outcomes.contains(&outcome_value);
        let payout = if won {
            stake * self.config.win_multiplier
        } else {
            0
        };

        // Crediting 0 on a loss is the resolution step that marks the
        // wager settled; it must not be skipped.
        let new_balance = self.accounts.credit_locked(&user_id, payout).await?;

        info!(
            user = %user_id,
            %wager_id,
            stake,
            outcome = outcome_value,
            won,
            payout,
            new_balance,
            "wager settled"
        );

        Ok(Settlement {
            wager_id,
            user_id,
            outcome_value,
            stake,
            payout,
            won,
            new_balance,
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}
