//! The read-only store of personas and their transactions.

use std::{collections::HashSet, path::Path};

use serde::Deserialize;

use crate::{Error, transaction::Transaction};

use super::core::{Persona, PersonaId};

/// The built-in demo data set.
const DEMO_PERSONAS_JSON: &str = include_str!("../../data/demo_personas.json");

/// The layout of a persona data file.
#[derive(Deserialize)]
struct PersonaFile {
    personas: Vec<PersonaRecord>,
}

#[derive(Deserialize)]
struct PersonaRecord {
    id: String,
    name: String,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Holds every persona the application can show.
///
/// The store is filled once at start-up and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaStore {
    personas: Vec<Persona>,
}

impl PersonaStore {
    /// Create a store from already validated personas.
    ///
    /// # Errors
    /// Returns [Error::DuplicatePersonaId] if two personas share an ID.
    pub fn new(personas: Vec<Persona>) -> Result<Self, Error> {
        let mut seen_ids = HashSet::with_capacity(personas.len());

        for persona in &personas {
            if !seen_ids.insert(&persona.id) {
                return Err(Error::DuplicatePersonaId(persona.id.to_string()));
            }
        }

        Ok(Self { personas })
    }

    /// Create a store with the built-in demo personas.
    ///
    /// # Errors
    /// Returns an error if the bundled data set fails validation.
    pub fn demo() -> Result<Self, Error> {
        Self::from_json_str(DEMO_PERSONAS_JSON)
    }

    /// Load personas from a JSON file.
    ///
    /// # Errors
    /// Returns [Error::PersonaFileRead] if the file cannot be read, otherwise
    /// any error from [PersonaStore::from_json_str].
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| {
            Error::PersonaFileRead(format!("{}: {error}", path.display()))
        })?;

        Self::from_json_str(&text)
    }

    /// Parse and validate personas from JSON text.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::InvalidPersonaData] if the JSON is malformed, a required
    ///   field is missing or a transaction type is unknown,
    /// - [Error::InvalidPersonaId] for an ID that is not a valid slug,
    /// - [Error::InvalidAmount] for a negative or non-finite amount,
    /// - [Error::DuplicateTransactionId] or [Error::DuplicatePersonaId] for
    ///   repeated IDs.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let file: PersonaFile = serde_json::from_str(text)
            .map_err(|error| Error::InvalidPersonaData(error.to_string()))?;

        let personas = file
            .personas
            .into_iter()
            .map(|record| {
                Persona::new(
                    PersonaId::new(&record.id)?,
                    &record.name,
                    record.tagline.as_deref(),
                    record.transactions,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("loaded {} personas", personas.len());

        Self::new(personas)
    }

    /// All personas in the order they were loaded.
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Get the persona with the ID `id`.
    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas
            .iter()
            .find(|persona| persona.id.as_str() == id)
    }
}
