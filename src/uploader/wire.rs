//! Raw serde structs matching the uploader node's responses.

use serde::Deserialize;

/// Receipt returned by the node for a stored transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    /// Transaction id; the content is addressed as `https://<gateway>/<id>`.
    pub id: String,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// Response of the account balance query.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    /// Balance in the chain's base unit, as a decimal string.
    pub balance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_parses_with_and_without_timestamp() {
        let full: UploadReceipt =
            serde_json::from_str(r#"{"id":"AbC123","timestamp":1714000000000}"#).unwrap();
        assert_eq!(full.id, "AbC123");
        assert_eq!(full.timestamp, Some(1714000000000));

        let bare: UploadReceipt = serde_json::from_str(r#"{"id":"AbC123"}"#).unwrap();
        assert_eq!(bare.timestamp, None);
    }

    #[test]
    fn test_balance_parses_decimal_string() {
        let resp: BalanceResponse = serde_json::from_str(r#"{"balance":"1000000"}"#).unwrap();
        assert_eq!(resp.balance, "1000000");
    }
}
