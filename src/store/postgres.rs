use async_trait::async_trait;
use sqlx::{types::Json, Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::entities::{NewTicket, Ticket};
use crate::error::Error;
use crate::store::TicketStore;

/// Tickets live in a single document-style table, one JSONB record per
/// ticket keyed by a store-assigned UUID.
pub struct PgTicketStore {
    pool: Pool<Postgres>,
}

impl PgTicketStore {
    #[tracing::instrument(name = "PgTicketStore::new", skip_all)]
    pub async fn new(pool: Pool<Postgres>) -> Result<Self, Error> {
        // TODO: move this to migrations
        pool.execute("CREATE TABLE IF NOT EXISTS tickets (id UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    #[tracing::instrument(skip(self))]
    async fn create(&self, ticket: NewTicket) -> Result<Ticket, Error> {
        let ticket = ticket.with_id(Uuid::new_v4());

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO tickets (id, data) VALUES ($1, $2)")
                .bind(&ticket.id)
                .bind(Json(&ticket)),
        )
        .await?;

        Ok(ticket)
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Ticket>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM tickets"))
            .await?;

        rows.into_iter()
            .map(|row| {
                let Json(ticket): Json<Ticket> = row.try_get("data")?;
                Ok(ticket)
            })
            .collect()
    }
}
