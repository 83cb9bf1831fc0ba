use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod content;
pub mod error;
pub mod metadata;
pub mod render;
pub mod handlers {
    pub mod page_handlers;
    pub mod site_handlers;
}

use config::Config;
use content::ContentStore;
use handlers::{page_handlers, site_handlers};

/// Directories under `STATIC_DIR` served as-is.
const STATIC_PREFIXES: [&str; 4] = ["imgs", "videos", "assets", "pkg"];

pub struct AppState {
    pub config: Config,
    pub content: Arc<ContentStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let content = Arc::new(ContentStore::new(config.content_dir.clone()));
        Self { config, content }
    }
}

fn static_files(dir: &Path) -> Router<Arc<AppState>> {
    let mut router = Router::new();
    for prefix in STATIC_PREFIXES {
        router = router.nest_service(&format!("/{prefix}"), ServeDir::new(dir.join(prefix)));
    }
    router.layer(SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=604800"),
    ))
}

pub fn app(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route("/", get(page_handlers::redirect_root))
        .route("/{locale}", get(page_handlers::landing))
        .route("/{locale}/compare", get(page_handlers::compare))
        .route("/{locale}/examples", get(page_handlers::examples))
        .route("/{locale}/guide", get(page_handlers::guide));

    let site_routes = Router::new()
        .route("/api/health", get(site_handlers::health_check))
        .route("/sitemap.xml", get(site_handlers::sitemap))
        .route("/robots.txt", get(site_handlers::robots));

    Router::new()
        // Static routes are more specific than `/{locale}` and win over it.
        .merge(site_routes)
        .merge(static_files(&state.config.static_dir))
        .merge(page_routes)
        .fallback(site_handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
