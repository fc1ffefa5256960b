/// Mock API client for development and testing
use async_trait::async_trait;
use tracing::info;

use crate::api::types::{MatchesResponse, StandingsResponse};
use crate::api::ApiError;
use crate::competition::Competition;
use crate::data_provider::FootballDataProvider;
use crate::fixtures;

/// Client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FootballDataProvider for MockClient {
    async fn standings(&self, competition: Competition) -> Result<StandingsResponse, ApiError> {
        info!("MockClient: Returning mock standings for {}", competition);
        Ok(fixtures::create_standings_response())
    }

    async fn matches(
        &self,
        competition: Competition,
        statuses: &[&str],
    ) -> Result<MatchesResponse, ApiError> {
        info!(
            "MockClient: Returning mock matches for {} with statuses {:?}",
            competition, statuses
        );
        Ok(fixtures::create_matches_response())
    }
}
