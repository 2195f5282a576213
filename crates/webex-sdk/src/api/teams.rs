/*
[INPUT]:  Team ids and team settings
[OUTPUT]: Teams and team streams
[POS]:    API layer - teams endpoints (/teams)
[UPDATE]: When the teams API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ListTeamsParams, Team, TeamSettings};

#[derive(Debug, Clone, Copy)]
pub struct TeamsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> TeamsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /teams
    pub fn list(&self, params: &ListTeamsParams) -> Result<ItemStream<Team>> {
        let url = self.client.endpoint("teams")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// POST /teams
    pub async fn create(&self, settings: &TeamSettings) -> Result<Team> {
        let url = self.client.endpoint("teams")?;
        self.client.post_json(url, settings).await
    }

    /// GET /teams/{teamId}
    pub async fn details(&self, team_id: &str) -> Result<Team> {
        let url = self.client.endpoint_segments(&["teams", team_id])?;
        self.client.get_json(url, &[]).await
    }

    /// PUT /teams/{teamId}
    pub async fn update(&self, team_id: &str, settings: &TeamSettings) -> Result<Team> {
        let url = self.client.endpoint_segments(&["teams", team_id])?;
        self.client.put_json(url, &[], settings).await
    }

    /// DELETE /teams/{teamId}
    pub async fn delete(&self, team_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["teams", team_id])?;
        self.client.delete(url, &[]).await
    }
}
