// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{acts, comments, ideas, pages},
    state::AppState,
};

/// Assembles the main application router.
///
/// * JSON API under `/api` (acts, comments, ideas).
/// * Server-rendered pages at `/` and `/ideas`, assets under `/static`.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let act_routes = Router::new()
        .route("/", get(acts::list_acts).post(acts::create_act))
        .route("/{id}/like", post(acts::like_act))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        );

    let idea_routes = Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/suggestions", get(ideas::list_suggestions))
        .route("/{id}/like", post(ideas::like_idea));

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/ideas", get(pages::ideas));

    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api/acts", act_routes)
        .nest("/api/ideas", idea_routes)
        .merge(page_routes)
        .nest_service("/static", static_dir)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
