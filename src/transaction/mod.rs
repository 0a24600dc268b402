//! Transactions and the engine that filters and sums them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The icon catalog used to decorate each transaction
//! - The query engine: type filtering, text search and totals
//! - View handlers for the transactions page and its JSON counterpart

mod core;
mod icon;
mod query;
mod transactions_api;
mod transactions_page;
mod view;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionType};
pub use icon::IconKind;
pub use query::{
    FilterState, QueryResult, Totals, TypeFilter, aggregate_totals, filter_transactions, query,
};
pub use transactions_api::{TransactionsResponse, get_transactions_json};
pub use transactions_page::{TransactionsQuery, TransactionsViewState, get_transactions_page};
