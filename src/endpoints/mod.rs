pub mod pushes;
pub mod status;

use axum::{
    middleware as axum_middleware,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::middleware::require_auth;
use crate::state::AppState;

/// Create the main router.
///
/// Everything except the landing page sits behind the credential gate.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/", get(index));

    let protected_routes = Router::new()
        .route("/srpush", post(pushes::srpush))
        .route("/list_unhandled", get(pushes::list_unhandled))
        .route("/mark_handled", post(pushes::mark_handled))
        .route("/status/update", post(status::update_status))
        .with_state(state.clone())
        .layer(axum_middleware::from_fn_with_state(state, require_auth));

    public_routes.merge(protected_routes)
}

/// Placeholder landing page; the real dashboard lives elsewhere
async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Move Along</title>
  </head>
  <body>
    Nothing to see here
  </body>
</html>"#,
    )
}
