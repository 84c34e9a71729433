mod ticket_api;

use crate::api::API;
use crate::external::RoutingGateway;
use crate::store::TicketStore;

/// Composes the ticket store and the routing gateway behind the API
/// traits. Holds no other state; each request runs its own chain of
/// external calls.
pub struct Engine<S, R> {
    store: S,
    routing: R,
}

impl<S, R> Engine<S, R>
where
    S: TicketStore + Send + Sync,
    R: RoutingGateway + Send + Sync,
{
    pub fn new(store: S, routing: R) -> Self {
        Self { store, routing }
    }
}

impl<S, R> API for Engine<S, R>
where
    S: TicketStore + Send + Sync,
    R: RoutingGateway + Send + Sync,
{
}
