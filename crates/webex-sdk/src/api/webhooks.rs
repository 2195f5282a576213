/*
[INPUT]:  Webhook ids and webhook registrations
[OUTPUT]: Webhooks and webhook streams
[POS]:    API layer - webhooks endpoints (/webhooks)
[UPDATE]: When the webhooks API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{CreateWebhook, ListWebhooksParams, UpdateWebhook, Webhook};

#[derive(Debug, Clone, Copy)]
pub struct WebhooksApi<'a> {
    client: &'a WebexClient,
}

impl<'a> WebhooksApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /webhooks
    pub fn list(&self, params: &ListWebhooksParams) -> Result<ItemStream<Webhook>> {
        let url = self.client.endpoint("webhooks")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// POST /webhooks
    pub async fn create(&self, webhook: &CreateWebhook) -> Result<Webhook> {
        let url = self.client.endpoint("webhooks")?;
        self.client.post_json(url, webhook).await
    }

    /// GET /webhooks/{webhookId}
    pub async fn details(&self, webhook_id: &str) -> Result<Webhook> {
        let url = self.client.endpoint_segments(&["webhooks", webhook_id])?;
        self.client.get_json(url, &[]).await
    }

    /// Update name, target, secret or status; setting status to active
    /// re-enables a webhook Webex disabled after delivery failures.
    ///
    /// PUT /webhooks/{webhookId}
    pub async fn update(&self, webhook_id: &str, update: &UpdateWebhook) -> Result<Webhook> {
        let url = self.client.endpoint_segments(&["webhooks", webhook_id])?;
        self.client.put_json(url, &[], update).await
    }

    /// DELETE /webhooks/{webhookId}
    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["webhooks", webhook_id])?;
        self.client.delete(url, &[]).await
    }
}
