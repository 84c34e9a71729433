use super::Engine;

use async_trait::async_trait;

use crate::api::TicketAPI;
use crate::entities::{CreateTicketParams, Ticket, TicketManifest};
use crate::error::Error;
use crate::external::RoutingGateway;
use crate::store::TicketStore;

#[async_trait]
impl<S, R> TicketAPI for Engine<S, R>
where
    S: TicketStore + Send + Sync,
    R: RoutingGateway + Send + Sync,
{
    /// Validate, resolve the driving distance, price, persist. One
    /// routing call and at most one write per submission; a failure at
    /// any step leaves the store untouched.
    #[tracing::instrument(skip(self))]
    async fn submit_ticket(&self, params: CreateTicketParams) -> Result<Ticket, Error> {
        let draft = params.validate()?;

        let distance_meters = self
            .routing
            .driving_distance(draft.start, draft.end)
            .await?;

        let ticket = self.store.create(draft.price(distance_meters)).await?;

        Ok(ticket)
    }

    #[tracing::instrument(skip(self))]
    async fn list_tickets(&self) -> Result<TicketManifest, Error> {
        let tickets = self.store.list_all().await?;

        Ok(TicketManifest::new(tickets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};
    use uuid::Uuid;

    use crate::entities::{Coordinates, NewTicket};
    use crate::error::{database_error, route_not_found_error};

    struct MemoryTicketStore {
        tickets: Mutex<Vec<Ticket>>,
    }

    impl MemoryTicketStore {
        fn new() -> Self {
            Self {
                tickets: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl TicketStore for MemoryTicketStore {
        async fn create(&self, ticket: NewTicket) -> Result<Ticket, Error> {
            let ticket = ticket.with_id(Uuid::new_v4());
            self.tickets.lock().unwrap().push(ticket.clone());

            Ok(ticket)
        }

        async fn list_all(&self) -> Result<Vec<Ticket>, Error> {
            Ok(self.tickets.lock().unwrap().clone())
        }
    }

    struct FailingTicketStore;

    #[async_trait]
    impl TicketStore for FailingTicketStore {
        async fn create(&self, _ticket: NewTicket) -> Result<Ticket, Error> {
            Err(database_error("connection refused"))
        }

        async fn list_all(&self) -> Result<Vec<Ticket>, Error> {
            Err(database_error("connection refused"))
        }
    }

    struct StubRouting {
        distance_meters: Option<f64>,
        calls: AtomicUsize,
    }

    impl StubRouting {
        fn returning(distance_meters: f64) -> Self {
            Self {
                distance_meters: Some(distance_meters),
                calls: AtomicUsize::new(0),
            }
        }

        fn no_route() -> Self {
            Self {
                distance_meters: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RoutingGateway for StubRouting {
        async fn driving_distance(
            &self,
            _start: Coordinates,
            _end: Coordinates,
        ) -> Result<f64, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.distance_meters.ok_or_else(route_not_found_error)
        }
    }

    fn params() -> CreateTicketParams {
        CreateTicketParams {
            passenger_id: Some("P1".into()),
            start_lat: Some(9.6610),
            start_lng: Some(80.0250),
            end_lat: Some(9.6781),
            end_lng: Some(80.0150),
        }
    }

    #[tokio::test]
    async fn submit_prices_and_persists_one_ticket() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::returning(2000.0));

        let ticket = assert_ok!(engine.submit_ticket(params()).await);

        assert_eq!(ticket.passenger_id, "P1");
        assert_eq!(ticket.distance_km, 2.0);
        assert_eq!(ticket.fare, 100.0);

        let stored = engine.store.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, ticket.id);
        assert_eq!(stored[0].fare, 100.0);
    }

    #[tokio::test]
    async fn invalid_submission_skips_routing_and_store() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::returning(2000.0));

        let mut params = params();
        params.end_lat = None;

        let err = assert_err!(engine.submit_ticket(params).await);

        assert_eq!(err.code, 101);
        assert_eq!(engine.routing.call_count(), 0);
        assert!(engine.store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_route_skips_store() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::no_route());

        let err = assert_err!(engine.submit_ticket(params()).await);

        assert_eq!(err.code, 102);
        assert_eq!(engine.routing.call_count(), 1);
        assert!(engine.store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_insert_fails_the_whole_submission() {
        let engine = Engine::new(FailingTicketStore, StubRouting::returning(2000.0));

        let err = assert_err!(engine.submit_ticket(params()).await);

        assert_eq!(err.code, 2);
        assert_eq!(engine.routing.call_count(), 1);
    }

    #[tokio::test]
    async fn unreachable_store_fails_the_listing() {
        let engine = Engine::new(FailingTicketStore, StubRouting::returning(2000.0));

        let err = assert_err!(engine.list_tickets().await);

        assert_eq!(err.code, 2);
    }

    #[tokio::test]
    async fn list_totals_previous_submissions() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::returning(2410.0));

        assert_ok!(engine.submit_ticket(params()).await);
        assert_ok!(engine.submit_ticket(params()).await);

        let manifest = assert_ok!(engine.list_tickets().await);

        assert_eq!(manifest.tickets.len(), 2);
        assert_eq!(manifest.total_fare, 120.5 + 120.5);
    }

    #[tokio::test]
    async fn list_is_empty_with_zero_total_on_fresh_store() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::returning(2000.0));

        let manifest = assert_ok!(engine.list_tickets().await);

        assert!(manifest.tickets.is_empty());
        assert_eq!(manifest.total_fare, 0.0);
    }

    #[tokio::test]
    async fn repeated_reads_return_the_same_records() {
        let engine = Engine::new(MemoryTicketStore::new(), StubRouting::returning(2000.0));

        assert_ok!(engine.submit_ticket(params()).await);

        let first = assert_ok!(engine.list_tickets().await);
        let second = assert_ok!(engine.list_tickets().await);

        assert_eq!(first.total_fare, second.total_fare);
        assert_eq!(first.tickets.len(), second.tickets.len());
        assert_eq!(first.tickets[0].id, second.tickets[0].id);
    }
}
