use maud::{DOCTYPE, Markup, html};

use crate::{endpoints, theme::Theme, transaction::TransactionType};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full pl-10 pr-4 py-3 rounded-xl text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-zinc-900 \
    border border-gray-200 dark:border-zinc-800 placeholder-slate-400 \
    focus:outline-none focus:ring-2 focus:ring-blue-500/30 focus:border-blue-500";

// Filter button styles
pub const FILTER_BUTTON_ACTIVE_STYLE: &str = "px-4 py-2 text-xs font-bold rounded-lg border \
    bg-blue-900 dark:bg-white text-white dark:text-blue-900 \
    border-blue-900 dark:border-white";
pub const FILTER_BUTTON_STYLE: &str = "px-4 py-2 text-xs font-bold rounded-lg border \
    bg-white dark:bg-zinc-900 text-slate-500 dark:text-slate-400 \
    border-gray-200 dark:border-zinc-800 hover:border-blue-500";

// Card styles
pub const CARD_STYLE: &str = "bg-white dark:bg-zinc-900 border border-gray-200 \
    dark:border-zinc-800 rounded-xl overflow-hidden shadow-sm";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "max-w-4xl mx-auto px-6 py-6 space-y-6 pb-20";

pub fn base(title: &str, theme: Theme, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[theme.html_class()]
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Persona Ledger" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
            }

            body
                class="min-h-screen font-sans bg-white text-gray-800 dark:bg-zinc-950 dark:text-zinc-100"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-zinc-950"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href=(endpoints::PERSONAS_VIEW)
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Personas"
                    }
                }
            }
        }
    );

    base(title, Theme::default(), &content)
}

/// The most fraction digits shown for an amount, e.g. paise and below.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format `amount` as Indian rupees, e.g. "₹1,23,456.5".
///
/// Digits are grouped the Indian way (the last three digits, then pairs) and
/// at most three fraction digits are shown with trailing zeros removed.
pub fn format_currency(amount: f64) -> String {
    // Formatting the float directly keeps every digit of amounts too large
    // for an integer type.
    let digits = format!("{:.prec$}", amount.abs(), prec = MAX_FRACTION_DIGITS);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let is_zero = whole.bytes().all(|digit| digit == b'0') && fraction.is_empty();
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_digits_indian(whole);

    if fraction.is_empty() {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{fraction}")
    }
}

/// Format an amount with a leading "+" for money in or "-" for money out.
pub fn format_signed_currency(amount: f64, kind: TransactionType) -> String {
    format!("{}{}", kind.sign(), format_currency(amount))
}

fn group_digits_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();

    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }

    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE)
        {
          (text)
        }

    )
}

#[cfg(test)]
mod tests {
    use crate::transaction::TransactionType;

    use super::{format_currency, format_signed_currency};

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn formats_small_amounts_without_separators() {
        assert_eq!(format_currency(7.0), "₹7");
        assert_eq!(format_currency(999.0), "₹999");
    }

    #[test]
    fn groups_thousands_then_pairs() {
        assert_eq!(format_currency(1234.0), "₹1,234");
        assert_eq!(format_currency(12345.0), "₹12,345");
        assert_eq!(format_currency(123456.0), "₹1,23,456");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn trims_trailing_fraction_zeros() {
        assert_eq!(format_currency(1234.5), "₹1,234.5");
        assert_eq!(format_currency(640.75), "₹640.75");
        assert_eq!(format_currency(0.125), "₹0.125");
    }

    #[test]
    fn rounds_to_three_fraction_digits() {
        assert_eq!(format_currency(1.23456), "₹1.235");
        assert_eq!(format_currency(999.9999), "₹1,000");
    }

    #[test]
    fn formats_amounts_beyond_integer_range() {
        assert_eq!(format_currency(1e20), "₹10,00,00,00,00,00,00,00,00,000");
        assert_eq!(format_currency(-1e20), "-₹10,00,00,00,00,00,00,00,00,000");

        let text = format_currency(f64::MAX);
        assert_eq!(text.chars().filter(char::is_ascii_digit).count(), 309);
        assert!(text.starts_with("₹17,97,69"), "got {text}");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "-₹1,234.5");
        assert_eq!(format_currency(-0.0), "₹0");
    }

    #[test]
    fn signed_currency_uses_transaction_type() {
        assert_eq!(
            format_signed_currency(500.0, TransactionType::Credit),
            "+₹500"
        );
        assert_eq!(
            format_signed_currency(120.0, TransactionType::Debit),
            "-₹120"
        );
    }
}
