//! Filtering, searching and summing a persona's transactions.
//!
//! Everything here is pure: the functions borrow the transaction list, never
//! modify it, and return the same output for the same input.

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

use super::core::{Transaction, TransactionType};

/// Which transaction types to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Show credits and debits.
    #[default]
    All,
    /// Show only money received.
    Credit,
    /// Show only money spent.
    Debit,
}

impl TypeFilter {
    /// The filters in the order they are displayed.
    pub const ALL: [TypeFilter; 3] = [Self::All, Self::Credit, Self::Debit];

    /// Whether a transaction of type `kind` passes this filter.
    pub fn matches(self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Credit => kind == TransactionType::Credit,
            Self::Debit => kind == TransactionType::Debit,
        }
    }

    /// The value used for this filter in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// The button label for this filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Credit => "Income",
            Self::Debit => "Expenses",
        }
    }
}

/// The user's current type selection and search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Which transaction types to show.
    pub type_filter: TypeFilter,
    /// Text to look for in the name or category, matched case-insensitively.
    pub search: String,
}

impl FilterState {
    /// Create a filter state.
    pub fn new(type_filter: TypeFilter, search: &str) -> Self {
        Self {
            type_filter,
            search: search.to_owned(),
        }
    }
}

/// The total money received and spent over a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// The sum of all credit amounts.
    pub total_credit: f64,
    /// The sum of all debit amounts.
    pub total_debit: f64,
}

/// The transactions to display along with the account-level totals.
#[derive(Debug, PartialEq)]
pub struct QueryResult<'a> {
    /// The transactions that passed the filter, in their original order.
    pub transactions: Vec<&'a Transaction>,
    /// Totals over the full, unfiltered list.
    pub totals: Totals,
}

/// Select the transactions that match `type_filter` and `search`.
///
/// A transaction is kept when its type passes `type_filter` and either
/// `search` is empty or the lowercased name or category contains the
/// lowercased `search`. The search text is not trimmed. The result keeps the
/// relative order of `transactions`.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    type_filter: TypeFilter,
    search: &str,
) -> Vec<&'a Transaction> {
    let needle = search.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| type_filter.matches(transaction.kind))
        .filter(|transaction| needle.is_empty() || matches_search(transaction, &needle))
        .collect()
}

fn matches_search(transaction: &Transaction, lowercase_needle: &str) -> bool {
    transaction.name.to_lowercase().contains(lowercase_needle)
        || transaction.category.to_lowercase().contains(lowercase_needle)
}

/// Sum the credit and debit amounts of `transactions`.
///
/// Both totals are zero for an empty list.
pub fn aggregate_totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            match transaction.kind {
                TransactionType::Credit => totals.total_credit += transaction.amount,
                TransactionType::Debit => totals.total_debit += transaction.amount,
            }

            totals
        })
}

/// Run the transactions page query for `persona`.
///
/// A missing persona behaves like a persona without transactions. Totals are
/// always computed over the persona's full list, regardless of `filter`.
pub fn query<'a>(persona: Option<&'a Persona>, filter: &FilterState) -> QueryResult<'a> {
    let transactions = persona.map_or(&[][..], |persona| persona.transactions.as_slice());

    QueryResult {
        transactions: filter_transactions(transactions, filter.type_filter, &filter.search),
        totals: aggregate_totals(transactions),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        persona::{Persona, PersonaId},
        transaction::{Transaction, TransactionType},
    };

    use super::{FilterState, Totals, TypeFilter, aggregate_totals, filter_transactions, query};

    fn salary_and_coffee() -> Vec<Transaction> {
        vec![
            Transaction::build("1", "Salary", 500.0, TransactionType::Credit)
                .category("Income")
                .finalise()
                .unwrap(),
            Transaction::build("2", "Coffee Shop", 120.0, TransactionType::Debit)
                .category("Food")
                .finalise()
                .unwrap(),
        ]
    }

    fn names(transactions: &[&Transaction]) -> Vec<String> {
        transactions
            .iter()
            .map(|transaction| transaction.name.clone())
            .collect()
    }

    #[test]
    fn empty_list_gives_empty_result_and_zero_totals() {
        let transactions: Vec<Transaction> = Vec::new();

        assert!(filter_transactions(&transactions, TypeFilter::All, "").is_empty());
        assert_eq!(
            aggregate_totals(&transactions),
            Totals {
                total_credit: 0.0,
                total_debit: 0.0
            }
        );
    }

    #[test]
    fn all_with_empty_search_keeps_everything_in_order() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::All, "");

        assert_eq!(names(&got), ["Salary", "Coffee Shop"]);
        assert_eq!(
            aggregate_totals(&transactions),
            Totals {
                total_credit: 500.0,
                total_debit: 120.0
            }
        );
    }

    #[test]
    fn debit_filter_keeps_only_debits() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::Debit, "");

        assert_eq!(names(&got), ["Coffee Shop"]);
        assert_eq!(got[0].amount, 120.0);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::All, "sal");

        assert_eq!(names(&got), ["Salary"]);
    }

    #[test]
    fn type_filter_excludes_search_match_of_other_type() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::Credit, "coffee");

        assert!(got.is_empty(), "want no transactions, got {got:?}");
    }

    #[test]
    fn search_matches_category() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::All, "FOOD");

        assert_eq!(names(&got), ["Coffee Shop"]);
    }

    #[test]
    fn whitespace_search_is_not_trimmed() {
        let transactions = salary_and_coffee();

        let got = filter_transactions(&transactions, TypeFilter::All, " ");
        assert_eq!(names(&got), ["Coffee Shop"]);

        let got = filter_transactions(&transactions, TypeFilter::All, "  ");
        assert!(got.is_empty());
    }

    #[test]
    fn search_lowercases_unicode() {
        let transactions = vec![
            Transaction::build("1", "ÉCOLE Fees", 900.0, TransactionType::Debit)
                .category("Education")
                .finalise()
                .unwrap(),
        ];

        let got = filter_transactions(&transactions, TypeFilter::All, "école");

        assert_eq!(names(&got), ["ÉCOLE Fees"]);
    }

    #[test]
    fn query_totals_ignore_filter() {
        let persona = Persona::new(
            PersonaId::new("test").unwrap(),
            "Test",
            None,
            salary_and_coffee(),
        )
        .unwrap();

        let result = query(Some(&persona), &FilterState::new(TypeFilter::Debit, "coffee"));

        assert_eq!(names(&result.transactions), ["Coffee Shop"]);
        assert_eq!(
            result.totals,
            Totals {
                total_credit: 500.0,
                total_debit: 120.0
            }
        );
    }

    #[test]
    fn query_without_persona_is_empty() {
        let result = query(None, &FilterState::default());

        assert!(result.transactions.is_empty());
        assert_eq!(result.totals, Totals::default());
    }

    #[test]
    fn filter_state_defaults_to_all_and_empty_search() {
        let state = FilterState::default();

        assert_eq!(state.type_filter, TypeFilter::All);
        assert_eq!(state.search, "");
    }

    #[test]
    fn type_filter_deserializes_from_lowercase() {
        let got: TypeFilter = serde_json::from_str("\"debit\"").unwrap();
        assert_eq!(got, TypeFilter::Debit);

        assert!(serde_json::from_str::<TypeFilter>("\"refunds\"").is_err());
    }
}
