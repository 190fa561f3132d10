//! Data Transfer Objects
//!
//! Response types for the endpoints that return structured JSON. The gallery
//! routes themselves answer with bare arrays and strings.

use serde::Serialize;

/// Health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of heat-maps currently published
    pub providers: usize,
    /// Number of providers in the configuration
    pub configured: usize,
    /// Published update time
    pub update_time: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Manual refresh response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Status: "success"
    pub status: String,
    /// Number of heat-maps published after the rescan
    pub providers: usize,
    /// Update time after the rescan
    pub update_time: String,
}
