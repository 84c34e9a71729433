use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{CreateTicketParams, Ticket, TicketManifest};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateTicketParams>,
) -> Result<Json<Ticket>, Error> {
    let ticket = api.submit_ticket(params).await?;

    Ok(ticket.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<TicketManifest>, Error> {
    let manifest = api.list_tickets().await?;

    Ok(manifest.into())
}
