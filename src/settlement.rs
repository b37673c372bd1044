//! Settlement types: the terminal result of one wager and its
//! presentation-ready shape.

use crate::types::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal result of one wager. Carries everything the calling layer
/// needs for display; no second ledger round-trip is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub wager_id: Uuid,
    pub user_id: UserId,
    /// The drawn die face.
    pub outcome_value: u8,
    pub stake: u64,
    /// 0 on a loss, `stake * win_multiplier` on a win.
    pub payout: u64,
    pub won: bool,
    pub new_balance: u64,
    /// Unix timestamp (seconds) of settlement.
    pub timestamp: i64,
}

/// Presentation payload derived from a [`Settlement`]. Pure data shaping:
/// no ledger access, no business logic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettlementNotice {
    pub wager_id: String,
    pub outcome_value: u8,
    pub stake: u64,
    pub payout: u64,
    pub won: bool,
    pub new_balance: u64,
    /// Signed balance delta of the whole wager, for display.
    pub net_change: i64,
}

impl From<&Settlement> for SettlementNotice {
    fn from(settlement: &Settlement) -> Self {
        Self {
            wager_id: settlement.wager_id.to_string(),
            outcome_value: settlement.outcome_value,
            stake: settlement.stake,
            payout: settlement.payout,
            won: settlement.won,
            new_balance: settlement.new_balance,
            net_change: settlement.payout as i64 - settlement.stake as i64,
        }
    }
}
