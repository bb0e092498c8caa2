//! Node error classification.
//!
//! Wallet and node failures arrive as a JSON-RPC code (sometimes) and a
//! free-text message (always). They are tagged here once so the rest of the
//! crate matches on [`WalletError`] variants instead of strings.

use crate::port::outbound::chain::WalletError;

/// EIP-1193 "user rejected request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Tag a node error by code and message. Matching is case-sensitive.
#[must_use]
pub fn classify(code: Option<i64>, message: &str) -> WalletError {
    let message = message.to_string();
    if code == Some(USER_REJECTED_CODE) || message.contains("user rejected") {
        WalletError::UserRejected(message)
    } else if message.contains("insufficient funds") {
        WalletError::InsufficientFunds(message)
    } else if message.contains("gas") {
        WalletError::Gas(message)
    } else {
        WalletError::Other(message)
    }
}

/// Classify a failed contract call or send.
pub fn classify_contract_error(err: &alloy_contract::Error) -> WalletError {
    let code = match err {
        alloy_contract::Error::TransportError(rpc) => rpc.as_error_resp().map(|resp| resp.code),
        _ => None,
    };
    classify(code, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_4001_is_user_rejection_whatever_the_text() {
        assert!(matches!(
            classify(Some(4001), "request denied"),
            WalletError::UserRejected(_)
        ));
    }

    #[test]
    fn message_patterns_are_tagged() {
        assert!(matches!(
            classify(None, "MetaMask: user rejected transaction"),
            WalletError::UserRejected(_)
        ));
        assert!(matches!(
            classify(Some(-32000), "insufficient funds for gas * price + value"),
            WalletError::InsufficientFunds(_)
        ));
        assert!(matches!(
            classify(Some(-32000), "intrinsic gas too low"),
            WalletError::Gas(_)
        ));
        assert_eq!(
            classify(None, "nonce too low"),
            WalletError::Other("nonce too low".into())
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(matches!(
            classify(None, "User Rejected"),
            WalletError::Other(_)
        ));
        assert!(matches!(classify(None, "GAS"), WalletError::Other(_)));
    }
}
