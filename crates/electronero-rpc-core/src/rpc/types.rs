//! Result shapes for the typed RPC wrappers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ==============================================================================
// Service
// ==============================================================================

/// Which Electronero service an endpoint belongs to.
///
/// Both services speak the same protocol; the kind only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Daemon,
    Wallet,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Daemon => f.write_str("daemon"),
            Service::Wallet => f.write_str("wallet"),
        }
    }
}

// ==============================================================================
// Results
// ==============================================================================

/// `getblockcount` result.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BlockCount {
    pub count: u64,
}

/// Wallet account balance from `get_balance`, in atomic units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: u64,
    pub unlocked_balance: u64,
}

/// `get_balance` parameters.
#[derive(Debug, Serialize)]
pub(crate) struct BalanceParams {
    pub account_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_ignores_extra_fields() {
        let raw = serde_json::json!({
            "balance": 100,
            "unlocked_balance": 50,
            "multisig_import_needed": false,
            "per_subaddress": []
        });
        let balance: Balance = serde_json::from_value(raw).expect("balance must decode");
        assert_eq!(
            balance,
            Balance {
                balance: 100,
                unlocked_balance: 50
            }
        );
    }

    #[test]
    fn balance_params_serialize_account_index() {
        let params = BalanceParams { account_index: 3 };
        assert_eq!(
            serde_json::to_value(params).expect("params must encode"),
            serde_json::json!({ "account_index": 3 })
        );
    }
}
