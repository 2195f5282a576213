/*
[INPUT]:  Workspace ids, list filters and workspace bodies
[OUTPUT]: Workspaces and workspace streams
[POS]:    API layer - workspaces endpoints (/workspaces)
[UPDATE]: When the workspaces API gains operations
*/

use reqwest::Method;

use crate::http::params::with_org_id;
use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ListWorkspacesParams, Workspace};

#[derive(Debug, Clone, Copy)]
pub struct WorkspacesApi<'a> {
    client: &'a WebexClient,
}

impl<'a> WorkspacesApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /workspaces
    pub fn list(&self, params: &ListWorkspacesParams) -> Result<ItemStream<Workspace>> {
        let url = self.client.endpoint("workspaces")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// GET /workspaces/{workspaceId}
    pub async fn details(&self, workspace_id: &str) -> Result<Workspace> {
        let url = self.client.endpoint_segments(&["workspaces", workspace_id])?;
        self.client.get_json(url, &[]).await
    }

    /// POST /workspaces
    pub async fn create(&self, workspace: &Workspace, org_id: Option<&str>) -> Result<Workspace> {
        let url = self.client.endpoint("workspaces")?;
        let body = serde_json::to_value(workspace)?;
        self.client
            .request_json(
                Method::POST,
                url,
                &with_org_id(Vec::new(), org_id),
                Some(&body),
            )
            .await
    }

    /// Replace a workspace's settings; `id` and `created` in the body are ignored
    ///
    /// PUT /workspaces/{workspaceId}
    pub async fn update(&self, workspace_id: &str, workspace: &Workspace) -> Result<Workspace> {
        let url = self.client.endpoint_segments(&["workspaces", workspace_id])?;
        let mut body = workspace.clone();
        body.id = None;
        body.created = None;
        self.client.put_json(url, &[], &body).await
    }

    /// DELETE /workspaces/{workspaceId}
    pub async fn delete(&self, workspace_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["workspaces", workspace_id])?;
        self.client.delete(url, &[]).await
    }
}
