//! Defines the core data model for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, transaction::icon::IconKind};

// ============================================================================
// MODELS
// ============================================================================

/// Identifies a transaction within a persona's transaction list.
///
/// Demo data uses both numbers and strings for IDs, so both are accepted when
/// deserializing and the ID is kept as text. The ID is only used as a
/// rendering key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTransactionId", into = "String")]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction ID from text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransactionId {
    Number(i64),
    Text(String),
}

impl From<RawTransactionId> for TransactionId {
    fn from(raw: RawTransactionId) -> Self {
        match raw {
            RawTransactionId::Number(number) => Self(number.to_string()),
            RawTransactionId::Text(text) => Self(text),
        }
    }
}

/// Whether money came into or went out of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received by the account holder.
    Credit,
    /// Money spent by the account holder.
    Debit,
}

impl TransactionType {
    /// The sign shown in front of an amount of this type.
    pub fn sign(self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or received.
///
/// Transactions are read-only snapshots. To create one, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The rendering key of the transaction.
    pub id: TransactionId,
    /// A display label, e.g. "Coffee Shop".
    pub name: String,
    /// The amount of money, always non-negative. The currency is implicit.
    pub amount: f64,
    /// Whether the money was received or spent.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// A free-text classification, e.g. "Groceries".
    pub category: String,
    /// A display-formatted date. It is never parsed.
    pub date: String,
    /// How the transaction was paid, e.g. "UPI".
    pub method: String,
    /// The pictogram shown next to the transaction.
    #[serde(default)]
    pub icon: IconKind,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        id: impl Into<String>,
        name: &str,
        amount: f64,
        kind: TransactionType,
    ) -> TransactionBuilder {
        TransactionBuilder {
            id: TransactionId::new(id),
            name: name.to_owned(),
            amount,
            kind,
            category: String::new(),
            date: String::new(),
            method: String::new(),
            icon: IconKind::default(),
        }
    }

    /// Check the invariants that the query engine relies on.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount {
                transaction_id: self.id.to_string(),
                amount: self.amount,
            });
        }

        Ok(())
    }
}

/// A builder for creating [Transaction] instances.
///
/// The optional display fields default to empty strings and the icon defaults
/// to [IconKind::Receipt]. Call [TransactionBuilder::finalise] to validate and
/// create the [Transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: TransactionId,
    name: String,
    amount: f64,
    kind: TransactionType,
    category: String,
    date: String,
    method: String,
    icon: IconKind,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the display date for the transaction.
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_owned();
        self
    }

    /// Set the payment method for the transaction.
    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_owned();
        self
    }

    /// Set the icon for the transaction.
    pub fn icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    /// Build the final [Transaction].
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn finalise(self) -> Result<Transaction, Error> {
        let transaction = Transaction {
            id: self.id,
            name: self.name,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date: self.date,
            method: self.method,
            icon: self.icon,
        };

        transaction.validate()?;

        Ok(transaction)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Error,
        transaction::{IconKind, Transaction, TransactionId, TransactionType},
    };

    #[test]
    fn finalise_succeeds() {
        let transaction = Transaction::build("1", "Salary", 500.0, TransactionType::Credit)
            .category("Income")
            .date("01 Mar 2025")
            .method("NEFT")
            .icon(IconKind::Briefcase)
            .finalise()
            .expect("Could not create transaction");

        assert_eq!(transaction.amount, 500.0);
        assert_eq!(transaction.category, "Income");
        assert_eq!(transaction.icon, IconKind::Briefcase);
    }

    #[test]
    fn finalise_fails_on_negative_amount() {
        let result = Transaction::build("1", "Refund", -1.0, TransactionType::Credit).finalise();

        assert_eq!(
            result,
            Err(Error::InvalidAmount {
                transaction_id: "1".to_owned(),
                amount: -1.0
            })
        );
    }

    #[test]
    fn finalise_fails_on_non_finite_amount() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Transaction::build("1", "Broken", amount, TransactionType::Debit).finalise();

            assert!(
                matches!(result, Err(Error::InvalidAmount { .. })),
                "want invalid amount error for {amount}, got {result:?}"
            );
        }
    }

    #[test]
    fn zero_amount_is_valid() {
        let result = Transaction::build("1", "Free trial", 0.0, TransactionType::Debit).finalise();

        assert!(result.is_ok());
    }

    #[test]
    fn deserializes_numeric_and_text_ids() {
        let numeric: Transaction = serde_json::from_value(json!({
            "id": 7,
            "name": "Coffee Shop",
            "amount": 120,
            "type": "debit",
            "category": "Food",
            "date": "12 Mar",
            "method": "UPI",
            "icon": "Coffee"
        }))
        .expect("Could not deserialize transaction with numeric ID");
        let text: Transaction = serde_json::from_value(json!({
            "id": "tx-7",
            "name": "Coffee Shop",
            "amount": 120,
            "type": "debit",
            "category": "Food",
            "date": "12 Mar",
            "method": "UPI",
            "icon": "Coffee"
        }))
        .expect("Could not deserialize transaction with text ID");

        assert_eq!(numeric.id, TransactionId::new("7"));
        assert_eq!(text.id, TransactionId::new("tx-7"));
        assert_eq!(numeric.kind, TransactionType::Debit);
        assert_eq!(numeric.icon, IconKind::Coffee);
    }

    #[test]
    fn deserialize_rejects_unknown_type() {
        let result = serde_json::from_value::<Transaction>(json!({
            "id": 1,
            "name": "Mystery",
            "amount": 1,
            "type": "refund",
            "category": "",
            "date": "",
            "method": ""
        }));

        assert!(result.is_err());
    }

    #[test]
    fn serializes_type_field_name() {
        let transaction = Transaction::build("3", "Rent", 15000.0, TransactionType::Debit)
            .finalise()
            .unwrap();

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["type"], "debit");
        assert_eq!(value["id"], "3");
        assert_eq!(value["icon"], "Receipt");
    }
}
