mod postgres;

pub use postgres::PgTicketStore;

use async_trait::async_trait;

use crate::entities::{NewTicket, Ticket};
use crate::error::Error;

/// Gateway to the ticket collection. `create` assigns the identity and
/// echoes back the full persisted record; `list_all` returns every
/// ticket in store-native order.
#[async_trait]
pub trait TicketStore {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket, Error>;
    async fn list_all(&self) -> Result<Vec<Ticket>, Error>;
}
