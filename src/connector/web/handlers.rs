use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use crate::application::GenerateCodeUseCase;
use crate::connector::api::Container;
use crate::domain::GenerationOutcome;

use super::page::render_page;

/// Shared by every request. The use case only holds the read-only client.
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<GenerateCodeUseCase>,
}

impl AppState {
    pub fn new(use_case: GenerateCodeUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }

    pub fn from_container(container: &Container) -> Self {
        Self::new(container.generate_use_case())
    }
}

/// Body of both the HTML form post and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub query: String,
}

/// `GET /`: the empty form.
pub async fn index() -> Html<String> {
    Html(render_page("", None))
}

/// `POST /`: run one submission and render the page with its outcome.
pub async fn submit(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Html<String> {
    let outcome = state.use_case.execute(&form.query).await;
    Html(render_page(&form.query, Some(&outcome)))
}

/// `POST /api/generate`: same as the form, answered as JSON.
pub async fn generate_json(
    State(state): State<AppState>,
    Json(form): Json<GenerateForm>,
) -> Json<GenerationOutcome> {
    Json(state.use_case.execute(&form.query).await)
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
