use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::entities::Coordinates;
use crate::error::{route_not_found_error, upstream_error, Error};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// External service resolving the driving distance between two points.
#[async_trait]
pub trait RoutingGateway {
    /// Returns the driving distance in meters, or a no-route error when
    /// the service cannot connect the two coordinates.
    async fn driving_distance(
        &self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<f64, Error>;
}

/// OpenRouteService directions client. One outbound request per lookup,
/// no retries, bounded by `REQUEST_TIMEOUT`.
pub struct OpenRouteService {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenRouteService {
    pub fn new(api_base: String, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_base,
            api_key,
        })
    }
}

#[async_trait]
impl RoutingGateway for OpenRouteService {
    #[tracing::instrument(skip(self))]
    async fn driving_distance(
        &self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<f64, Error> {
        let start: String = start.into();
        let end: String = end.into();

        let url = format!("https://{}/v2/directions/driving-car", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("start", start)])
            .query(&[("end", end)])
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .send()
            .await?;

        if res.status().as_u16() >= 500 {
            return Err(upstream_error());
        }

        // ORS signals "no route" with a 404 and an error payload, not
        // an empty feature collection, so 4xx responses are classified
        // by body rather than by status.
        let data: DirectionsResponse = res.json().await?;

        route_distance(data)
    }
}

fn route_distance(data: DirectionsResponse) -> Result<f64, Error> {
    data.distance_meters().ok_or_else(route_not_found_error)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct FeatureProperties {
    summary: RouteSummary,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RouteSummary {
    distance: f64,
}

impl DirectionsResponse {
    /// An empty or absent feature list signals "no route".
    fn distance_meters(&self) -> Option<f64> {
        self.features
            .first()
            .map(|feature| feature.properties.summary.distance)
    }
}
