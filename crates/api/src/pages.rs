use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use crate::ApiState;

/// Informational pages: route and file under the templates root.
pub(crate) const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/diet", "diet.html"),
    ("/tests", "test.html"),
    ("/contact", "contact.html"),
    ("/celiac", "celiac.html"),
    ("/scan", "scanner.html"),
    ("/chat", "chat.html"),
    ("/gluten_info", "gluten_info.html"),
    ("/nearby_stores", "nearby_stores.html"),
    ("/recipes", "recipes.html"),
    ("/myths", "myths.html"),
    ("/symptom_checker", "symptom_checker.html"),
    ("/weekly_diet", "weekly_diet.html"),
    ("/diet-form", "diet-form.html"),
    ("/recipe/pancakes", "recipes/pancakes.html"),
    ("/recipe/zucchini-pasta", "recipes/zucchini_pasta.html"),
    ("/recipe/quinoa-soup", "recipes/quinoa_soup.html"),
    ("/recipe/chickpea-wrap", "recipes/chickpea-wrap.html"),
    ("/recipe/quinoa-bowl", "recipes/quinoa-bowl.html"),
    ("/recipe/gluten-free-pizza", "recipes/gluten-free-pizza.html"),
];

pub(crate) fn page_routes() -> Router<ApiState> {
    PAGES
        .iter()
        .fold(Router::new(), |router, &(route, file)| {
            router.route(
                route,
                get(move |State(state): State<ApiState>| serve_page(state, file)),
            )
        })
}

async fn serve_page(state: ApiState, file: &'static str) -> Response {
    let path = state.templates_root.join(file);

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(error) => {
            warn!(path = %path.display(), %error, "page unavailable");
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": "page_not_found",
                    "message": format!("page {} is not available", file)
                })),
            )
                .into_response()
        }
    }
}
