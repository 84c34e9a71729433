use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::error::{validation_error, Error};

/// Fixed per-kilometer rate. No surge, no rounding.
pub const FARE_PER_KM: f64 = 50.0;

/// A persisted record of one priced trip. Identity is assigned by the
/// ticket store on creation; the record is never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub passenger_id: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub distance_km: f64,
    pub fare: f64,
}

/// A fully priced ticket awaiting an identity from the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTicket {
    pub passenger_id: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub distance_km: f64,
    pub fare: f64,
}

impl NewTicket {
    pub fn with_id(self, id: Uuid) -> Ticket {
        Ticket {
            id,
            passenger_id: self.passenger_id,
            start_lat: self.start_lat,
            start_lng: self.start_lng,
            end_lat: self.end_lat,
            end_lng: self.end_lng,
            distance_km: self.distance_km,
            fare: self.fare,
        }
    }
}

/// Raw submission body. Every field is optional so that absent keys
/// surface as a validation error rather than a deserialization failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTicketParams {
    pub passenger_id: Option<String>,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
}

impl CreateTicketParams {
    /// Presence checks only: a coordinate of exactly 0.0 is valid. An
    /// empty passenger_id is treated as absent.
    pub fn validate(self) -> Result<TicketDraft, Error> {
        let passenger_id = self
            .passenger_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| validation_error("passenger_id"))?;

        let start_lat = self.start_lat.ok_or_else(|| validation_error("start_lat"))?;
        let start_lng = self.start_lng.ok_or_else(|| validation_error("start_lng"))?;
        let end_lat = self.end_lat.ok_or_else(|| validation_error("end_lat"))?;
        let end_lng = self.end_lng.ok_or_else(|| validation_error("end_lng"))?;

        Ok(TicketDraft {
            passenger_id,
            start: Coordinates::new(start_lat, start_lng),
            end: Coordinates::new(end_lat, end_lng),
        })
    }
}

/// A validated submission, not yet priced.
#[derive(Clone, Debug)]
pub struct TicketDraft {
    pub passenger_id: String,
    pub start: Coordinates,
    pub end: Coordinates,
}

impl TicketDraft {
    pub fn price(self, distance_meters: f64) -> NewTicket {
        let distance_km = distance_meters / 1000.0;

        NewTicket {
            passenger_id: self.passenger_id,
            start_lat: self.start.latitude,
            start_lng: self.start.longitude,
            end_lat: self.end.latitude,
            end_lng: self.end.longitude,
            distance_km,
            fare: distance_km * FARE_PER_KM,
        }
    }
}

/// List response: every stored ticket plus the aggregate fare.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketManifest {
    pub tickets: Vec<Ticket>,
    #[serde(rename = "totalFare")]
    pub total_fare: f64,
}

impl TicketManifest {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        let total_fare = tickets.iter().map(|ticket| ticket.fare).sum();

        Self {
            tickets,
            total_fare,
        }
    }
}
