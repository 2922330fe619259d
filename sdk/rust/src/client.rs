use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub height_m: f64,
    pub weight_ton: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String, // "height", "weight", "time_zone", "prohibited", "grade" or "info"
    pub severity: String,
    pub message: String,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub vehicle: Vehicle,
    pub vehicle_plate: String,
    pub driver_name: String,
    pub notes: String,
    pub alerts: Vec<Alert>,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub origin: String,
    pub destination: String,
    pub vehicle_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteResponse {
    pub success: bool,
    pub route_id: String,
    pub share_link: String,
    pub alerts_count: usize,
    pub route: Route,
}

/// Non-success answer from the service.
#[derive(Debug)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "route service returned {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

pub struct RotaClient {
    client: Client,
    base_url: String,
}

impl RotaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, Box<dyn std::error::Error>> {
        let resp = self.client.get(self.url("/api/vehicles")).send().await?;
        decode(resp).await
    }

    /// Restrictions are returned as raw JSON; their fields depend on the type.
    pub async fn restrictions(&self) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error>> {
        let resp = self.client.get(self.url("/api/restrictions")).send().await?;
        decode(resp).await
    }

    /// Plan a route. Validation failures come back as [`ApiError`] with status 400.
    pub async fn create_route(
        &self,
        req: &CreateRouteRequest,
    ) -> Result<CreateRouteResponse, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(self.url("/api/routes"))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn get_route(&self, id: &str) -> Result<Route, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(self.url(&format!("/api/routes/{}", id)))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn list_routes(&self) -> Result<Vec<Route>, Box<dyn std::error::Error>> {
        let resp = self.client.get(self.url("/api/routes")).send().await?;
        decode(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Box<dyn std::error::Error>> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or(text);
        return Err(Box::new(ApiError {
            status: status.as_u16(),
            message,
        }));
    }

    Ok(serde_json::from_str(&text)?)
}
