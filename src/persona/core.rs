//! Defines the persona model: a named demo profile and its transactions.

use std::{collections::HashSet, fmt::Display};

use serde::Serialize;

use crate::{Error, transaction::Transaction};

/// The URL-safe identifier of a persona, e.g. "priya".
///
/// Persona IDs appear in query strings, so they are restricted to lowercase
/// ASCII letters, digits, '-' and '_'.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PersonaId(String);

impl PersonaId {
    /// Create a persona ID.
    ///
    /// # Errors
    /// Returns [Error::InvalidPersonaId] if `id` is empty or contains
    /// characters other than lowercase ASCII letters, digits, '-' and '_'.
    pub fn new(id: &str) -> Result<Self, Error> {
        let is_valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        if is_valid {
            Ok(Self(id.to_owned()))
        } else {
            Err(Error::InvalidPersonaId(id.to_owned()))
        }
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A demo profile that owns an ordered list of transactions.
///
/// A persona is a read-only snapshot once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    /// The identifier used in links.
    pub id: PersonaId,
    /// The display name, e.g. "Priya Sharma".
    pub name: String,
    /// A short description shown on the persona list.
    pub tagline: Option<String>,
    /// The persona's transactions in display order.
    pub transactions: Vec<Transaction>,
}

impl Persona {
    /// Create a persona, validating its transactions.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::InvalidAmount] if a transaction has a negative or non-finite amount,
    /// - [Error::DuplicateTransactionId] if two transactions share an ID.
    pub fn new(
        id: PersonaId,
        name: &str,
        tagline: Option<&str>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, Error> {
        let mut seen_ids = HashSet::with_capacity(transactions.len());

        for transaction in &transactions {
            transaction.validate()?;

            if !seen_ids.insert(&transaction.id) {
                return Err(Error::DuplicateTransactionId {
                    persona_id: id.to_string(),
                    transaction_id: transaction.id.to_string(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.to_owned(),
            tagline: tagline.map(str::to_owned),
            transactions,
        })
    }
}
