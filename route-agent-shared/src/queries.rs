//! Wire types for the routing backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteQuery {
    pub query: String,
}

/// One leg of the trip, with display strings already formatted by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub time: String,
}

/// Successful response of `POST /api/route`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteResult {
    pub origin: String,
    pub optimized_order: Vec<String>,
    pub total_distance_km: f64,
    pub estimated_time_min: u32,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    /// The backend sends `""` when it has no link, so blank strings land here as `None`.
    #[serde(default, deserialize_with = "non_blank")]
    pub google_maps_url: Option<String>,
}

/// Body of any non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "non_blank")]
    pub detail: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
