//! Personas: named demo profiles that each own a list of transactions.
//!
//! This module contains:
//! - The `Persona` model and its validated `PersonaId`
//! - The read-only `PersonaStore`, filled from the demo data or a JSON file
//! - The view handler for the persona list page

mod core;
mod personas_page;
mod store;

pub use core::{Persona, PersonaId};
pub use personas_page::{PersonasViewState, get_personas_page};
pub use store::PersonaStore;
