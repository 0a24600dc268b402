//! The JSON version of the transactions page.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::{
    core::Transaction,
    query::{Totals, TypeFilter, query},
    transactions_page::{TransactionsQuery, TransactionsViewState, find_persona},
};

/// The body of a response from the transactions API.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse<'a> {
    /// The ID of the persona that was found, or `None`.
    pub persona: Option<&'a str>,
    /// The type filter that was applied.
    pub filter: TypeFilter,
    /// The search text that was applied.
    pub search: &'a str,
    /// The transactions that passed the filter.
    pub transactions: Vec<&'a Transaction>,
    /// Totals over all of the persona's transactions.
    pub totals: Totals,
}

/// Return the filtered transactions and totals for the persona in the query
/// string as JSON.
pub async fn get_transactions_json(
    State(state): State<TransactionsViewState>,
    Query(query_params): Query<TransactionsQuery>,
) -> Response {
    let persona = find_persona(state.persona_store(), &query_params);
    let filter = query_params.filter_state();
    let result = query(persona, &filter);

    let body = TransactionsResponse {
        persona: persona.map(|persona| persona.id.as_str()),
        filter: filter.type_filter,
        search: &filter.search,
        transactions: result.transactions,
        totals: result.totals,
    };

    Json(body).into_response()
}
