use mongodb::Client;
use std::time::Instant;

/// Outcome of a MongoDB health probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Connectivity check with latency and error details, for readiness probes
pub async fn check_health(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = client.list_database_names().await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
