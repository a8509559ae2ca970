//! Web form routes.
//!
//! One text input, one text output. The form posts back to `/ask` and the
//! answer is rendered on the same page.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::error;

use stylist_embeddings::OllamaProvider;
use stylist_engine::Stylist;

/// Shared application state. The stylist's item collection is read-only
/// after load, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub stylist: Arc<Stylist<OllamaProvider>>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/ask", post(ask_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn index_handler() -> Html<String> {
    Html(render_page(None, None))
}

/// The single form field.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    query: String,
}

async fn ask_handler(State(state): State<AppState>, Form(form): Form<AskForm>) -> Response {
    match state.stylist.answer(&form.query).await {
        Ok(answer) => Html(render_page(Some(&form.query), Some(&answer))).into_response(),
        Err(e) => {
            error!("Query failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn health_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// Escape text for embedding in HTML.
fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render the page, optionally with the previous query and its answer.
fn render_page(query: Option<&str>, answer: Option<&str>) -> String {
    let query = query.map(escape_html).unwrap_or_default();
    let answer_block = answer
        .map(|a| format!("<h2>Suggestion</h2>\n<pre>{}</pre>", escape_html(a)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Stylist</title></head>\n\
         <body>\n\
         <h1>Stylist</h1>\n\
         <p>Ask for an outfit; embeddings refresh only when the catalog changes.</p>\n\
         <form method=\"post\" action=\"/ask\">\n\
         <input type=\"text\" name=\"query\" size=\"60\" value=\"{query}\" placeholder=\"Ask about outfits...\">\n\
         <button type=\"submit\">Ask</button>\n\
         </form>\n\
         {answer_block}\n\
         </body>\n\
         </html>\n"
    )
}
