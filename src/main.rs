use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

use farebox::config::{Config, DB_ACQUIRE_TIMEOUT, DB_MAX_CONNECTIONS};
use farebox::engine::Engine;
use farebox::external::OpenRouteService;
use farebox::server::serve;
use farebox::store::PgTicketStore;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env().unwrap();

    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await
        .unwrap();

    let store = PgTicketStore::new(pool).await.unwrap();
    let routing = OpenRouteService::new(config.ors_api_base, config.ors_api_key).unwrap();

    serve(Engine::new(store, routing), config.port).await;
}
