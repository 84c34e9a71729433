mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::server::handlers::tickets;

async fn health() -> &'static str {
    "farebox is running"
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, port: u16) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/", get(health))
        .route("/api/tickets", get(tickets::list).post(tickets::create))
        .layer(Extension(api));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
