//! The page listing every persona, each linking to its transactions.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    theme::Theme,
    transaction::{TransactionsQuery, TypeFilter},
};

use super::{Persona, PersonaStore};

/// The state needed for the persona list page.
#[derive(Debug, Clone)]
pub struct PersonasViewState {
    persona_store: Arc<PersonaStore>,
}

impl FromRef<AppState> for PersonasViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            persona_store: state.persona_store.clone(),
        }
    }
}

/// Render the list of personas.
pub async fn get_personas_page(
    State(state): State<PersonasViewState>,
    jar: CookieJar,
) -> Response {
    personas_view(state.persona_store.personas(), Theme::from_jar(&jar)).into_response()
}

/// The link to a persona's transactions with the default filters.
fn transactions_url(persona: &Persona) -> String {
    TransactionsQuery::new(Some(persona.id.as_str()), TypeFilter::All, "")
        .to_url(endpoints::TRANSACTIONS_VIEW)
}

fn personas_view(personas: &[Persona], theme: Theme) -> Markup {
    let nav_bar = NavBar::new("Personas", endpoints::PERSONAS_VIEW, theme).into_html();

    let persona_row = |persona: &Persona| {
        let transaction_count = persona.transactions.len();

        html!(
            li data-persona-id=(persona.id.as_str())
            {
                a
                    href=(transactions_url(persona))
                    class="flex items-center justify-between gap-4 px-5 py-4
                        hover:bg-gray-50 dark:hover:bg-zinc-800/30"
                {
                    div class="min-w-0"
                    {
                        h2 class="text-sm font-semibold text-gray-800 dark:text-white"
                        {
                            (persona.name)
                        }

                        @if let Some(tagline) = &persona.tagline {
                            p class="text-xs text-slate-400 dark:text-zinc-500 truncate"
                            {
                                (tagline)
                            }
                        }
                    }

                    span class="text-xs text-slate-500 dark:text-zinc-400 whitespace-nowrap"
                        data-transaction-count=(transaction_count)
                    {
                        (transaction_count)
                        @if transaction_count == 1 { " transaction" } @else { " transactions" }
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Choose a persona" }

            div class=(CARD_STYLE)
            {
                @if personas.is_empty() {
                    p class="p-8 text-center text-sm text-slate-400"
                    {
                        "No personas loaded."
                    }
                } @else {
                    ul class="divide-y divide-gray-200 dark:divide-zinc-800"
                    {
                        @for persona in personas {
                            (persona_row(persona))
                        }
                    }
                }
            }
        }
    );

    base("Personas", theme, &content)
}
