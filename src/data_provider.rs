/// Trait for providing football data, abstracting over the real API client
/// and mock implementations
use async_trait::async_trait;

use crate::api::types::{MatchesResponse, StandingsResponse};
use crate::api::ApiError;
use crate::competition::Competition;
use crate::credentials::Credential;

/// Data provider surface, implemented by both the real `api::Client` and
/// the development `MockClient`
#[async_trait]
pub trait FootballDataProvider: Send + Sync {
    /// Get the standings table for a competition
    async fn standings(&self, competition: Competition) -> Result<StandingsResponse, ApiError>;

    /// Get matches for a competition, filtered to the given status codes
    async fn matches(
        &self,
        competition: Competition,
        statuses: &[&str],
    ) -> Result<MatchesResponse, ApiError>;

    /// Install a token saved while the program is running. Providers that
    /// do not authenticate ignore it.
    fn update_token(&mut self, _token: Credential) {}
}

#[async_trait]
impl FootballDataProvider for crate::api::Client {
    async fn standings(&self, competition: Competition) -> Result<StandingsResponse, ApiError> {
        self.standings(competition).await
    }

    async fn matches(
        &self,
        competition: Competition,
        statuses: &[&str],
    ) -> Result<MatchesResponse, ApiError> {
        self.matches(competition, statuses).await
    }

    fn update_token(&mut self, token: Credential) {
        self.set_token(token);
    }
}
