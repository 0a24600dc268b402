//! The light/dark colour theme and the endpoint that toggles it.
//!
//! The theme is stored in a cookie so it survives page loads.

use axum::{Form, response::Redirect};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use serde::Deserialize;
use time::Duration;

use crate::endpoints;

/// The name of the cookie that stores the theme.
pub(crate) const THEME_COOKIE: &str = "theme";
/// How long the browser keeps the theme cookie.
pub(crate) const THEME_COOKIE_DURATION: Duration = Duration::days(365);

/// The colour scheme used to render pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Read the theme from the cookie jar, defaulting to [Theme::Light].
    pub fn from_jar(jar: &CookieJar) -> Self {
        match jar.get(THEME_COOKIE).map(|cookie| cookie.value()) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The cookie value for the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The class to put on the root `html` element, if any.
    pub fn html_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// The accessible label for the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// The glyph for the button that switches away from this theme.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// The form submitted by the theme toggle button.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// The page to go back to after switching themes.
    pub redirect_url: Option<String>,
}

/// Flip the theme cookie and send the client back to the page it came from.
///
/// Only local paths are accepted as redirect targets, anything else goes to
/// the persona list.
pub async fn toggle_theme_endpoint(
    jar: CookieJar,
    Form(form): Form<ThemeForm>,
) -> (CookieJar, Redirect) {
    let theme = Theme::from_jar(&jar).toggled();
    tracing::debug!("switching theme to {}", theme.as_str());

    let redirect_url = form
        .redirect_url
        .filter(|url| is_local_path(url))
        .unwrap_or_else(|| endpoints::PERSONAS_VIEW.to_owned());

    let jar = jar.add(
        Cookie::build((THEME_COOKIE, theme.as_str()))
            .path("/")
            .max_age(THEME_COOKIE_DURATION)
            .http_only(true)
            .same_site(SameSite::Lax),
    );

    (jar, Redirect::to(&redirect_url))
}

fn is_local_path(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.contains('\\')
}
