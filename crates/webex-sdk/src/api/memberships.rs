/*
[INPUT]:  Membership ids, list filters and membership bodies
[OUTPUT]: Room memberships and membership streams
[POS]:    API layer - memberships endpoints (/memberships)
[UPDATE]: When the memberships API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{CreateMembership, ListMembershipsParams, Membership, UpdateMembership};

#[derive(Debug, Clone, Copy)]
pub struct MembershipsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> MembershipsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /memberships
    pub fn list(&self, params: &ListMembershipsParams) -> Result<ItemStream<Membership>> {
        let url = self.client.endpoint("memberships")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// Add a person to a room by id or email
    ///
    /// POST /memberships
    pub async fn create(&self, membership: &CreateMembership) -> Result<Membership> {
        let url = self.client.endpoint("memberships")?;
        self.client.post_json(url, membership).await
    }

    /// GET /memberships/{membershipId}
    pub async fn details(&self, membership_id: &str) -> Result<Membership> {
        let url = self
            .client
            .endpoint_segments(&["memberships", membership_id])?;
        self.client.get_json(url, &[]).await
    }

    /// PUT /memberships/{membershipId}
    pub async fn update(
        &self,
        membership_id: &str,
        update: &UpdateMembership,
    ) -> Result<Membership> {
        let url = self
            .client
            .endpoint_segments(&["memberships", membership_id])?;
        self.client.put_json(url, &[], update).await
    }

    /// DELETE /memberships/{membershipId}
    pub async fn delete(&self, membership_id: &str) -> Result<()> {
        let url = self
            .client
            .endpoint_segments(&["memberships", membership_id])?;
        self.client.delete(url, &[]).await
    }
}
