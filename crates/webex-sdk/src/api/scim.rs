/*
[INPUT]:  Organization id, SCIM filters, user resources and patch operations
[OUTPUT]: SCIM users and SCIM-paged user streams
[POS]:    API layer - SCIM 2.0 users (/identity/scim/{orgId}/v2/Users)
[UPDATE]: When SCIM groups or bulk operations are added
*/

use reqwest::Url;

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{PatchRequest, ScimUser, SearchUsersParams};

/// Users requested per SCIM page
const SCIM_PAGE_SIZE: u32 = 100;

/// SCIM endpoints live outside the versioned REST root, so URLs are built
/// from the API root rather than the `v1/` base.
#[derive(Debug, Clone, Copy)]
pub struct ScimUsersApi<'a> {
    client: &'a WebexClient,
    org_id: &'a str,
}

impl<'a> ScimUsersApi<'a> {
    pub(crate) fn new(client: &'a WebexClient, org_id: &'a str) -> Self {
        Self { client, org_id }
    }

    /// Search users with an optional SCIM filter
    ///
    /// GET /identity/scim/{orgId}/v2/Users
    pub fn search(&self, params: &SearchUsersParams) -> Result<ItemStream<ScimUser>> {
        let url = self.users_url(None)?;
        Ok(self
            .client
            .follow_scim_pagination(url, query_pairs(params)?, SCIM_PAGE_SIZE))
    }

    /// GET /identity/scim/{orgId}/v2/Users/{userId}
    pub async fn details(&self, user_id: &str) -> Result<ScimUser> {
        let url = self.users_url(Some(user_id))?;
        self.client.get_json(url, &[]).await
    }

    /// POST /identity/scim/{orgId}/v2/Users
    pub async fn create(&self, user: &ScimUser) -> Result<ScimUser> {
        let url = self.users_url(None)?;
        self.client.post_json(url, user).await
    }

    /// Replace the whole user resource
    ///
    /// PUT /identity/scim/{orgId}/v2/Users/{userId}
    pub async fn replace(&self, user_id: &str, user: &ScimUser) -> Result<ScimUser> {
        let url = self.users_url(Some(user_id))?;
        self.client.put_json(url, &[], user).await
    }

    /// PATCH /identity/scim/{orgId}/v2/Users/{userId}
    pub async fn patch(&self, user_id: &str, patch: &PatchRequest) -> Result<ScimUser> {
        let url = self.users_url(Some(user_id))?;
        self.client.patch_json(url, patch).await
    }

    /// DELETE /identity/scim/{orgId}/v2/Users/{userId}
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        let url = self.users_url(Some(user_id))?;
        self.client.delete(url, &[]).await
    }

    fn users_url(&self, user_id: Option<&str>) -> Result<Url> {
        let mut segments = vec!["identity", "scim", self.org_id, "v2", "Users"];
        segments.extend(user_id);
        self.client.root_endpoint_segments(&segments)
    }
}
