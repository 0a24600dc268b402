//! Defines the route handler for the page that displays a persona's transactions.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, endpoints,
    persona::{Persona, PersonaStore},
    theme::Theme,
};

use super::{
    query::{FilterState, TypeFilter, query},
    view::{transaction_list_update_view, transactions_view},
};

/// The query parameters of the transactions page and API.
///
/// Missing parameters fall back to the defaults: no persona, all types and
/// an empty search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionsQuery {
    /// The ID of the persona whose transactions to show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// Which transaction types to show.
    #[serde(default)]
    pub filter: TypeFilter,
    /// Text to search for in transaction names and categories.
    #[serde(default)]
    pub search: String,
}

impl TransactionsQuery {
    pub(crate) fn new(persona: Option<&str>, filter: TypeFilter, search: &str) -> Self {
        Self {
            persona: persona.map(str::to_owned),
            filter,
            search: search.to_owned(),
        }
    }

    pub(crate) fn filter_state(&self) -> FilterState {
        FilterState::new(self.filter, &self.search)
    }

    pub(crate) fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self)
            .inspect_err(|error| {
                tracing::error!("Could not encode transactions query {self:?}: {error}");
            })
            .unwrap_or_default()
    }

    pub(crate) fn to_url(&self, route: &str) -> String {
        let query = self.to_query_string();

        if query.is_empty() {
            route.to_owned()
        } else {
            format!("{route}?{query}")
        }
    }
}

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The personas and their transactions.
    persona_store: Arc<PersonaStore>,
}

impl TransactionsViewState {
    pub(crate) fn new(persona_store: Arc<PersonaStore>) -> Self {
        Self { persona_store }
    }

    pub(crate) fn persona_store(&self) -> &PersonaStore {
        &self.persona_store
    }
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.persona_store.clone())
    }
}

/// Look up the persona named in `query`.
///
/// An unknown ID is treated like no persona at all.
pub(crate) fn find_persona<'a>(
    persona_store: &'a PersonaStore,
    query: &TransactionsQuery,
) -> Option<&'a Persona> {
    let persona_id = query.persona.as_deref()?;
    let persona = persona_store.get(persona_id);

    if persona.is_none() {
        tracing::warn!("Requested transactions for unknown persona \"{persona_id}\"");
    }

    persona
}

/// Render the transactions of the persona in the query string.
///
/// Requests made by htmx only get the transaction list so the search box can
/// update it in place. History restores made by htmx after a cache miss need
/// the whole page.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    HxRequest(is_htmx_request): HxRequest,
    HxHistoryRestoreRequest(is_history_restore): HxHistoryRestoreRequest,
    jar: CookieJar,
    Query(query_params): Query<TransactionsQuery>,
) -> Response {
    let persona = find_persona(&state.persona_store, &query_params);
    let filter = query_params.filter_state();
    let result = query(persona, &filter);

    tracing::debug!(
        "showing {} transactions for persona {:?}",
        result.transactions.len(),
        query_params.persona
    );

    let current_url = query_params.to_url(endpoints::TRANSACTIONS_VIEW);
    let persona_id = persona.map(|persona| persona.id.as_str());

    if is_htmx_request && !is_history_restore {
        return transaction_list_update_view(persona_id, &result, &filter, &current_url)
            .into_response();
    }

    transactions_view(
        persona,
        &result,
        &filter,
        Theme::from_jar(&jar),
        &current_url,
    )
    .into_response()
}
