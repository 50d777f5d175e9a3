use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::domain::{Match, Profile};

/// Response for the run matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMatchingResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "fallbackCount")]
    pub fallback_count: usize,
    pub summary: String,
}

/// Latest result set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "runSequence")]
    pub run_sequence: u64,
}

/// Profile listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<Arc<Profile>>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
