use crate::error::{Result, ShipBrokerError};
use crate::models::{Cargo, Vessel};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

pub const VESSELS_PATH: &str = "/api/v1/vessels/";
pub const CARGOES_PATH: &str = "/api/v1/cargoes/";

/// Read-only client for the ship broker REST API.
///
/// Requests carry no query parameters or extra headers.
#[derive(Debug, Clone)]
pub struct ShipBrokerHttpClient {
    client: Client,
    base_url: String,
}

impl ShipBrokerHttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Like [`ShipBrokerHttpClient::new`] but with a per-request timeout.
    /// The browser fetch API has no timeout, so it is ignored on wasm32.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = Client::builder();
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout;
            Client::new()
        };

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The vessel collection as raw JSON records. Only the array itself is
    /// checked here; each record is converted when it is rendered.
    pub async fn list_vessels(&self) -> Result<Vec<Value>> {
        let vessels: Vec<Value> = self.get_json(VESSELS_PATH).await?;
        info!("🚢 Fetched {} vessels", vessels.len());
        Ok(vessels)
    }

    /// The cargo collection as raw JSON records.
    pub async fn list_cargoes(&self) -> Result<Vec<Value>> {
        let cargoes: Vec<Value> = self.get_json(CARGOES_PATH).await?;
        info!("📦 Fetched {} cargoes", cargoes.len());
        Ok(cargoes)
    }

    pub async fn get_vessel(&self, id: i64) -> Result<Vessel> {
        self.get_json(&format!("{}{}", VESSELS_PATH, id)).await
    }

    pub async fn get_cargo(&self, id: i64) -> Result<Cargo> {
        self.get_json(&format!("{}{}", CARGOES_PATH, id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!("📋 GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ShipBrokerError::ServerError {
                status: response.status().as_u16(),
            });
        }

        // Decode from text so a bad body surfaces as Decode rather than Network.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
