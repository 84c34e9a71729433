mod open_route_service;

pub use open_route_service::{OpenRouteService, RoutingGateway};
