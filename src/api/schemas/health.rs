use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub services: ServiceStates,
}

/// Connectivity of each backing service, keyed by its canonical name.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStates {
    pub postgresql: String,
    pub redis: String,
    pub rabbitmq: String,
}
