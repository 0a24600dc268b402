//! Persona Ledger is a small web app for browsing the transactions of demo
//! personas.
//!
//! Each persona owns a read-only list of transactions. The transactions page
//! narrows the list by type and search text while the summary cards always
//! show the totals over the full list.
//!
//! This library provides a REST API that directly serves HTML pages, plus a
//! JSON endpoint with the same query results.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod persona;
mod routing;
mod theme;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use persona::{Persona, PersonaId, PersonaStore};
pub use routing::build_router;
pub use transaction::{
    FilterState, IconKind, QueryResult, Totals, Transaction, TransactionBuilder, TransactionId,
    TransactionType, TypeFilter, aggregate_totals, filter_transactions, query,
};

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the Ctrl+C signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction amount was negative, NaN or infinite.
    ///
    /// Amounts are magnitudes, the direction of the money is given by the
    /// transaction type.
    #[error("transaction \"{transaction_id}\" has an invalid amount {amount}")]
    InvalidAmount {
        /// The ID of the offending transaction.
        transaction_id: String,
        /// The amount that was rejected.
        amount: f64,
    },

    /// Two transactions of the same persona share an ID.
    #[error("persona \"{persona_id}\" has more than one transaction with the ID \"{transaction_id}\"")]
    DuplicateTransactionId {
        /// The persona that owns the transactions.
        persona_id: String,
        /// The repeated transaction ID.
        transaction_id: String,
    },

    /// Two personas share an ID.
    #[error("the persona ID \"{0}\" is used more than once")]
    DuplicatePersonaId(String),

    /// A persona ID was empty or not URL-safe.
    #[error(
        "invalid persona ID \"{0}\": use lowercase letters, digits, '-' and '_' only"
    )]
    InvalidPersonaId(String),

    /// The persona data could not be parsed, e.g. a required field is missing
    /// or a transaction has an unknown type.
    #[error("could not parse persona data: {0}")]
    InvalidPersonaData(String),

    /// The persona data file could not be read.
    #[error("could not read persona file: {0}")]
    PersonaFileRead(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
