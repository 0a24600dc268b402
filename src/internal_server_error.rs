//! The page shown when something goes wrong on the server.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The explanation shown on the 500 page.
pub struct InternalServerError<'a> {
    /// What went wrong, in a few words.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try reloading the page or check the server logs.",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let markup = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(markup.into_string())).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        endpoints,
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::InternalServerError;

    #[tokio::test]
    async fn renders_description_and_fix() {
        let response = InternalServerError {
            description: "Could not load personas",
            fix: "Check the persona file",
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not load personas"));
        assert!(text.contains("Check the persona file"));

        let back_link = html
            .select(&Selector::parse("a").unwrap())
            .next()
            .expect("No link back found");
        assert_eq!(back_link.value().attr("href"), Some(endpoints::PERSONAS_VIEW));
    }
}
