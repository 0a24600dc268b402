//! HTML rendering for the transactions page.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        CARD_STYLE, FILTER_BUTTON_ACTIVE_STYLE, FILTER_BUTTON_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, format_currency, format_signed_currency, link,
    },
    navigation::{NavBar, theme_redirect_input},
    persona::Persona,
    theme::Theme,
};

use super::{
    core::{Transaction, TransactionType},
    query::{FilterState, QueryResult, Totals, TypeFilter},
    transactions_page::TransactionsQuery,
};

/// The ID of the element that htmx swaps when the search text changes.
pub(crate) const TRANSACTION_LIST_ID: &str = "transaction-list";

/// The ID of the group of type filter links.
pub(crate) const FILTER_BUTTONS_ID: &str = "transaction-filters";

pub(crate) fn transactions_view(
    persona: Option<&Persona>,
    result: &QueryResult<'_>,
    filter: &FilterState,
    theme: Theme,
    current_url: &str,
) -> Markup {
    let persona_id = persona.map(|persona| persona.id.as_str());
    let nav_bar = NavBar::new("Transactions", current_url, theme)
        .back_to(endpoints::PERSONAS_VIEW)
        .into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(persona) = persona {
                p class="text-sm text-slate-500 dark:text-zinc-400" data-persona-name="true"
                {
                    (persona.name)
                }
            } @else {
                p class="text-sm text-slate-500 dark:text-zinc-400" data-persona-missing="true"
                {
                    "No persona selected. "
                    (link(endpoints::PERSONAS_VIEW, "Choose a persona"))
                }
            }

            (summary_cards_view(result.totals))

            (search_form_view(persona_id, filter))

            (filter_buttons_view(persona_id, filter, false))

            (transaction_list_view(&result.transactions))
        }
    };

    base("Transactions", theme, &content)
}

fn summary_cards_view(totals: Totals) -> Markup {
    html! {
        div class="grid grid-cols-2 gap-4"
        {
            div
                class="bg-emerald-50 dark:bg-emerald-900/10 border border-emerald-100
                    dark:border-emerald-800/30 rounded-xl p-4"
                data-total="credit"
            {
                div class="flex items-center gap-2 mb-1"
                {
                    span class="text-emerald-600 dark:text-emerald-400" aria-hidden="true" { "↙" }
                    span class="text-xs font-medium text-emerald-700 dark:text-emerald-400" { "Money In" }
                }

                p class="text-lg font-bold text-emerald-700 dark:text-emerald-300" data-amount="true"
                {
                    (format_signed_currency(totals.total_credit, TransactionType::Credit))
                }
            }

            div
                class="bg-red-50 dark:bg-red-900/10 border border-red-100
                    dark:border-red-800/30 rounded-xl p-4"
                data-total="debit"
            {
                div class="flex items-center gap-2 mb-1"
                {
                    span class="text-red-500 dark:text-red-400" aria-hidden="true" { "↗" }
                    span class="text-xs font-medium text-red-600 dark:text-red-400" { "Money Out" }
                }

                p class="text-lg font-bold text-red-600 dark:text-red-300" data-amount="true"
                {
                    (format_signed_currency(totals.total_debit, TransactionType::Debit))
                }
            }
        }
    }
}

fn search_form_view(persona_id: Option<&str>, filter: &FilterState) -> Markup {
    let list_target = format!("#{TRANSACTION_LIST_ID}");

    html! {
        form method="get" action=(endpoints::TRANSACTIONS_VIEW) class="relative" role="search"
        {
            @if let Some(persona_id) = persona_id {
                input type="hidden" name="persona" value=(persona_id);
            }

            input type="hidden" name="filter" value=(filter.type_filter.as_query_value());

            span
                class="absolute left-3.5 top-1/2 -translate-y-1/2 text-slate-400"
                aria-hidden="true"
            {
                "⌕"
            }

            input
                type="search"
                name="search"
                placeholder="Search transactions..."
                aria-label="Search transactions"
                autocomplete="off"
                value=(filter.search)
                class=(FORM_TEXT_INPUT_STYLE)
                hx-get=(endpoints::TRANSACTIONS_VIEW)
                hx-trigger="input changed delay:200ms, search"
                hx-target=(list_target)
                hx-swap="outerHTML"
                hx-include="closest form"
                hx-push-url="true";
        }
    }
}

/// The response to a search made by htmx.
///
/// htmx swaps the list into the page and pushes `current_url` into the
/// history, so the filter links and the theme form's redirect URL are sent
/// out of band to keep them in step with the new search.
pub(crate) fn transaction_list_update_view(
    persona_id: Option<&str>,
    result: &QueryResult<'_>,
    filter: &FilterState,
    current_url: &str,
) -> Markup {
    html! {
        (transaction_list_view(&result.transactions))
        (filter_buttons_view(persona_id, filter, true))
        (theme_redirect_input(current_url, true))
    }
}

fn filter_buttons_view(
    persona_id: Option<&str>,
    filter: &FilterState,
    swap_out_of_band: bool,
) -> Markup {
    html! {
        div
            id=(FILTER_BUTTONS_ID)
            class="flex gap-2"
            role="group"
            aria-label="Filter by type"
            hx-swap-oob=[swap_out_of_band.then_some("true")]
        {
            @for type_filter in TypeFilter::ALL {
                @let is_current = type_filter == filter.type_filter;
                @let url = TransactionsQuery::new(persona_id, type_filter, &filter.search)
                    .to_url(endpoints::TRANSACTIONS_VIEW);

                a
                    href=(url)
                    data-filter=(type_filter.as_query_value())
                    aria-current=[is_current.then_some("page")]
                    class=(if is_current { FILTER_BUTTON_ACTIVE_STYLE } else { FILTER_BUTTON_STYLE })
                {
                    (type_filter.label())
                }
            }
        }
    }
}

/// Render the list of transactions, or the empty state if there are none.
///
/// This is also the fragment returned to htmx requests.
pub(crate) fn transaction_list_view(transactions: &[&Transaction]) -> Markup {
    html! {
        div id=(TRANSACTION_LIST_ID) class=(CARD_STYLE)
        {
            @if transactions.is_empty() {
                div class="p-8 text-center text-slate-400" data-empty-state="true"
                {
                    p class="text-3xl mb-2 opacity-50" aria-hidden="true" { "🧾" }
                    p class="text-sm" { "No transactions found" }
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-zinc-800"
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let (icon_background, icon_colour, amount_colour) = match transaction.kind {
        TransactionType::Credit => (
            "bg-emerald-50 dark:bg-emerald-900/20",
            "text-emerald-600 dark:text-emerald-400",
            "text-emerald-600 dark:text-emerald-400",
        ),
        TransactionType::Debit => (
            "bg-slate-100 dark:bg-zinc-800",
            "text-slate-500 dark:text-zinc-400",
            "text-gray-800 dark:text-zinc-200",
        ),
    };

    html! {
        li
            class="flex items-center gap-4 px-5 py-4 hover:bg-gray-50 dark:hover:bg-zinc-800/30"
            data-transaction-row="true"
            data-transaction-id=(transaction.id.as_str())
        {
            div class={ "w-10 h-10 rounded-xl flex items-center justify-center shrink-0 " (icon_background) }
            {
                span
                    class={ "text-xl " (icon_colour) }
                    role="img"
                    aria-label=(transaction.icon.name())
                    data-icon=(transaction.icon.name())
                {
                    (transaction.icon.glyph())
                }
            }

            div class="flex-1 min-w-0"
            {
                h4 class="text-sm font-semibold text-gray-800 dark:text-white truncate"
                {
                    (transaction.name)
                }

                div class="flex items-center gap-2 mt-0.5 text-[11px] text-slate-400 dark:text-zinc-500"
                {
                    span { (transaction.date) }
                    span class="text-slate-300 dark:text-zinc-700" { "·" }
                    span { (transaction.method) }
                    span class="text-slate-300 dark:text-zinc-700" { "·" }
                    span
                        class="px-1.5 py-0.5 rounded bg-slate-100 dark:bg-zinc-800
                            text-slate-500 dark:text-zinc-400 font-medium"
                        data-category="true"
                    {
                        (transaction.category)
                    }
                }
            }

            span
                class={ "text-sm font-bold tabular-nums whitespace-nowrap " (amount_colour) }
                data-amount="true"
                title=(format_currency(transaction.amount))
            {
                (format_signed_currency(transaction.amount, transaction.kind))
            }
        }
    }
}
