//! This file defines the template for the navigation bar at the top of each page.

use maud::{Markup, html};

use crate::{endpoints, theme::Theme};

/// The ID of the hidden input that holds the theme form's redirect URL.
pub(crate) const THEME_REDIRECT_INPUT_ID: &str = "theme-redirect-url";

/// The sticky bar at the top of a page.
///
/// It shows an optional back link, the page title and a button that toggles
/// the colour theme and then returns to `current_url`.
pub struct NavBar<'a> {
    title: &'a str,
    back_url: Option<&'a str>,
    current_url: &'a str,
    theme: Theme,
}

impl<'a> NavBar<'a> {
    /// Get the navigation bar for the page at `current_url`.
    pub fn new(title: &'a str, current_url: &'a str, theme: Theme) -> Self {
        Self {
            title,
            back_url: None,
            current_url,
            theme,
        }
    }

    /// Show a back link to `back_url`.
    pub fn back_to(mut self, back_url: &'a str) -> Self {
        self.back_url = Some(back_url);
        self
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav
                class="sticky top-0 z-50 bg-white/95 dark:bg-zinc-950/90 backdrop-blur-xl
                    border-b border-gray-200 dark:border-zinc-800"
            {
                div class="max-w-4xl mx-auto px-6 py-4 flex justify-between items-center"
                {
                    div class="flex items-center gap-4"
                    {
                        @if let Some(back_url) = self.back_url {
                            a
                                href=(back_url)
                                aria-label="Back"
                                data-back-link="true"
                                class="p-2 -ml-2 text-slate-500 rounded-full
                                    hover:bg-gray-100 dark:hover:bg-slate-800/50"
                            {
                                "←"
                            }
                        }

                        span class="font-semibold text-lg text-gray-800 dark:text-white"
                        {
                            (self.title)
                        }
                    }

                    form method="post" action=(endpoints::THEME_API)
                    {
                        (theme_redirect_input(self.current_url, false))

                        button
                            type="submit"
                            aria-label=(self.theme.toggle_label())
                            title=(self.theme.toggle_label())
                            class="p-2 text-slate-500 hover:text-blue-900 dark:hover:text-white"
                        {
                            (self.theme.toggle_glyph())
                        }
                    }
                }
            }
        )
    }
}

/// The hidden input that tells the theme endpoint where to go back to.
///
/// Responses that change the page URL without reloading it send this with
/// `swap_out_of_band` set so htmx replaces the input in the nav bar.
pub(crate) fn theme_redirect_input(current_url: &str, swap_out_of_band: bool) -> Markup {
    html! {
        input
            type="hidden"
            id=(THEME_REDIRECT_INPUT_ID)
            name="redirect_url"
            value=(current_url)
            hx-swap-oob=[swap_out_of_band.then_some("true")];
    }
}
