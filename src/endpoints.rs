//! The API endpoints URIs.

/// The root route which redirects to the persona list.
pub const ROOT: &str = "/";
/// The page for choosing a persona.
pub const PERSONAS_VIEW: &str = "/personas";
/// The page for displaying a persona's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for querying a persona's transactions as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for switching between the light and dark theme.
pub const THEME_API: &str = "/api/theme";
