//! Encoding and decoding of ledger backups.
//!
//! A backup is a JSON array of exchange records, one per transaction, in
//! ledger order. The record shape is fixed by the serde attributes on
//! [Transaction]: `date`, `desc`, `amount` and `type`, nothing more and
//! nothing less. The export endpoint and the import endpoint both speak this
//! format, so a file downloaded from one can always be fed back to the other.

use crate::{Error, transaction::Transaction};

/// Serialize a ledger snapshot to backup bytes.
///
/// Every field and the transaction order are preserved verbatim.
///
/// # Errors
/// Returns [Error::Serialize] if the snapshot cannot be encoded as JSON.
pub fn export(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(transactions).map_err(|error| Error::Serialize(error.to_string()))
}

/// Deserialize backup bytes into a transaction sequence.
///
/// The sequence is returned unmodified, in payload order, with no sorting or
/// deduplication; the caller decides what to do with it (in practice,
/// [crate::ledger::Ledger::replace_all]).
///
/// # Errors
/// - [Error::BackupParse] if `bytes` is not well-formed JSON.
/// - [Error::BackupSchema] if the top-level value is not an array, or any
///   element is not an object with exactly the four expected fields with the
///   correct types.
pub fn import(bytes: &[u8]) -> Result<Vec<Transaction>, Error> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|error| Error::BackupParse(error.to_string()))?;

    if !value.is_array() {
        return Err(Error::BackupSchema(
            "the top-level value must be an array of transactions".to_owned(),
        ));
    }

    serde_json::from_value(value).map_err(|error| Error::BackupSchema(error.to_string()))
}

#[cfg(test)]
mod backup_tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        transaction::{Transaction, TransactionKind},
    };

    use super::{export, import};

    fn sample_ledger() -> Vec<Transaction> {
        vec![
            Transaction {
                date: date!(2024 - 01 - 10),
                description: "Groceries".to_owned(),
                amount: 150_000,
                kind: TransactionKind::Expense,
            },
            Transaction {
                date: date!(2024 - 01 - 05),
                description: "Salary".to_owned(),
                amount: 5_000_000,
                kind: TransactionKind::Income,
            },
        ]
    }

    #[test]
    fn import_of_export_reproduces_the_ledger() {
        let ledger = sample_ledger();

        let bytes = export(&ledger).unwrap();
        let restored = import(&bytes).unwrap();

        assert_eq!(restored, ledger);
    }

    #[test]
    fn import_accepts_the_documented_exchange_format() {
        let payload = json!([
            { "date": "2024-01-05", "desc": "Salary", "amount": 5_000_000u64, "type": "income" }
        ])
        .to_string();

        let transactions = import(payload.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Salary");
        assert_eq!(transactions[0].kind, TransactionKind::Income);
    }

    #[test]
    fn import_preserves_payload_order() {
        let payload = json!([
            { "date": "2023-12-01", "desc": "b", "amount": 2u64, "type": "expense" },
            { "date": "2024-01-01", "desc": "a", "amount": 1u64, "type": "income" },
        ])
        .to_string();

        let transactions = import(payload.as_bytes()).unwrap();

        let descriptions: Vec<_> = transactions
            .iter()
            .map(|tx| tx.description.as_str())
            .collect();
        assert_eq!(descriptions, ["b", "a"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = import(b"{not json");

        assert!(matches!(result, Err(Error::BackupParse(_))));
    }

    #[test]
    fn top_level_object_is_a_schema_error() {
        let payload = json!({ "date": "2024-01-05", "desc": "Salary", "amount": 1u64, "type": "income" })
            .to_string();

        let result = import(payload.as_bytes());

        assert!(matches!(result, Err(Error::BackupSchema(_))));
    }

    #[test]
    fn wrong_field_type_is_a_schema_error() {
        let payload = json!([
            { "date": "2024-01-05", "desc": "Salary", "amount": "lots", "type": "income" }
        ])
        .to_string();

        let result = import(payload.as_bytes());

        assert!(matches!(result, Err(Error::BackupSchema(_))));
    }

    #[test]
    fn negative_amount_is_a_schema_error() {
        let payload = json!([
            { "date": "2024-01-05", "desc": "Refund", "amount": -100, "type": "expense" }
        ])
        .to_string();

        let result = import(payload.as_bytes());

        assert!(matches!(result, Err(Error::BackupSchema(_))));
    }

    #[test]
    fn unknown_field_is_a_schema_error() {
        let payload = json!([
            { "date": "2024-01-05", "desc": "Salary", "amount": 1u64, "type": "income", "extra": true }
        ])
        .to_string();

        let result = import(payload.as_bytes());

        assert!(matches!(result, Err(Error::BackupSchema(_))));
    }

    #[test]
    fn missing_field_is_a_schema_error() {
        let payload = json!([
            { "date": "2024-01-05", "desc": "Salary", "amount": 1u64 }
        ])
        .to_string();

        let result = import(payload.as_bytes());

        assert!(matches!(result, Err(Error::BackupSchema(_))));
    }
}
