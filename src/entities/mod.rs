mod coordinates;
mod ticket;

pub use coordinates::Coordinates;
pub use ticket::{CreateTicketParams, NewTicket, Ticket, TicketDraft, TicketManifest, FARE_PER_KM};
