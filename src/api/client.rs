use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ApiError;
use super::types::{MatchesResponse, StandingsResponse};
use crate::competition::Competition;
use crate::credentials::Credential;

pub const BASE_URL: &str = "https://api.football-data.org/v4";

/// The status filter the live view asks for
pub const DEFAULT_MATCH_STATUSES: &[&str] =
    &["SCHEDULED", "LIVE", "IN_PLAY", "PAUSED", "FINISHED"];

/// Header carrying the API token
const AUTH_HEADER: &str = "X-Auth-Token";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// football-data.org client.
///
/// Holds the token as an optional value: a client without a token is valid
/// and fails every read locally with `ApiError::Unauthenticated`.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<Credential>,
}

impl Client {
    pub fn new(token: Option<Credential>) -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL.to_string(), token)
    }

    pub fn with_base_url(base_url: String, token: Option<Credential>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Swap in a new token, e.g. after the user saved one in settings.
    pub fn set_token(&mut self, token: Credential) {
        self.token = Some(token);
    }

    pub async fn standings(
        &self,
        competition: Competition,
    ) -> Result<StandingsResponse, ApiError> {
        let path = format!("/competitions/{}/standings", competition.remote_id());
        self.get_json(&path, &[]).await
    }

    pub async fn matches(
        &self,
        competition: Competition,
        statuses: &[&str],
    ) -> Result<MatchesResponse, ApiError> {
        let path = format!("/competitions/{}/matches", competition.remote_id());
        self.get_json(&path, &[("status", statuses.join(","))]).await
    }

    /// Authenticated GET with JSON response. Fails before touching the
    /// network when no token is configured.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.token.as_ref().ok_or(ApiError::Unauthenticated)?;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, token.as_str())
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(classify_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

/// Classify a non-2xx response status.
fn classify_status(status: u16) -> ApiError {
    match status {
        403 => ApiError::InvalidCredential,
        429 => {
            warn!("API rate limit hit (429)");
            ApiError::RateLimited
        }
        other => ApiError::Upstream(other),
    }
}
