use crate::activities::Directory;
use crate::assets;
use crate::config;
use crate::state;

use axum::Router;
use axum::routing::get;
use axum::routing::post;
use tower_http::trace::TraceLayer;

mod activities;

pub fn app(config: config::AppConfig) -> Router {
    let directory = match &config.activities_file {
        Some(path) => match Directory::load(path) {
            Ok(directory) => directory,
            Err(err) => {
                tracing::warn!("failed to load activities file, using built-in seed: {err}");
                Directory::seed()
            }
        },
        None => Directory::seed(),
    };
    let state = state::AppState {
        config,
        directory: std::sync::Arc::new(std::sync::Mutex::new(directory)),
    };
    Router::new()
        .route("/", get(assets::index_redirect))
        .route("/activities", get(activities::activity_list))
        .route(
            "/activities/{name}/signup",
            post(activities::activity_signup).delete(activities::activity_unregister),
        )
        .route("/static/index.html", get(assets::index_page))
        .route("/static/styles.css", get(assets::stylesheet))
        .route("/static/app.js", get(assets::app_script))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
