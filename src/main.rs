use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, trace};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod constants;
pub mod controllers;
pub mod errors;
pub mod state;

use constants::{BLOG_API_PORT, BLOG_DATA_FILE};
use controllers::c_posts::{
    get_posts, handle_create_post, handle_delete_post, handle_get_post, handle_update_post,
};
use state::AppState;

#[instrument]
#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    trace!("tracing subscriber initialized");

    // build our application
    let app = init_api(AppState::new(BLOG_DATA_FILE));

    // run our app
    serve(app, BLOG_API_PORT).await;
}

fn init_api(state: AppState) -> Router {
    Router::new()
        .route("/v1/api/posts", get(get_posts))
        .route("/v1/api/posts", post(handle_create_post))
        .route("/v1/api/posts/:id", get(handle_get_post))
        .route("/v1/api/posts/:id", patch(handle_update_post))
        .route("/v1/api/posts/:id", delete(handle_delete_post))
        // request log layer, then blanket CORS for browser clients
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[instrument(skip(app))]
async fn serve(app: Router, port: u16) {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await.unwrap();
    info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
