use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stable user key issued by the external identity system
/// (for the reference deployment, the messaging platform's user id).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Persisted per-user balance record. The ledger store is the sole
/// authority on `balance`; mutations go through the account service
/// under the per-user lock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: UserId,
    /// Informational only, never consulted by settlement logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub balance: u64,
    /// Calendar date of the last claimed daily bonus, `None` until first claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bonus_date: Option<NaiveDate>,
}

impl Account {
    /// Fresh account as created on first interaction.
    pub fn new(user_id: UserId, starting_balance: u64) -> Self {
        Self {
            user_id,
            display_name: None,
            balance: starting_balance,
            last_bonus_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_json_round_trip() {
        let mut account = Account::new(UserId::from("42"), 15);
        account.display_name = Some("alice".to_string());
        account.last_bonus_date = NaiveDate::from_ymd_opt(2024, 3, 1);

        let bytes = serde_json::to_vec(&account).unwrap();
        let decoded: Account = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded, account);
    }

    #[test]
    fn test_account_decodes_without_optional_fields() {
        let json = r#"{"user_id":"42","balance":15}"#;
        let decoded: Account = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.balance, 15);
        assert!(decoded.display_name.is_none());
        assert!(decoded.last_bonus_date.is_none());
    }
}
