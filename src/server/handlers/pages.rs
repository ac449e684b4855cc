//! Page handlers.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use super::super::AppState;

/// The upload/overlay page.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    languages: String,
}

/// Render the main page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        languages: state.extractor.engine().languages().to_string(),
    };
    Html(template.render().unwrap_or_else(|e| e.to_string()))
}
