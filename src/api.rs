use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{CreateTicketParams, Ticket, TicketManifest};
use crate::error::Error;

#[async_trait]
pub trait TicketAPI {
    async fn submit_ticket(&self, params: CreateTicketParams) -> Result<Ticket, Error>;
    async fn list_tickets(&self) -> Result<TicketManifest, Error>;
}

pub trait API: TicketAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
