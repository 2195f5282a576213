/*
[INPUT]:  Room ids, message ids and message bodies
[OUTPUT]: Messages and message streams
[POS]:    API layer - messages endpoints (/messages)
[UPDATE]: When the messages API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, WebexError, query_pairs};
use crate::types::{
    CreateMessage, EditMessage, ListDirectMessagesParams, ListMessagesParams, Message,
};

#[derive(Debug, Clone, Copy)]
pub struct MessagesApi<'a> {
    client: &'a WebexClient,
}

impl<'a> MessagesApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Messages of one room, newest first
    ///
    /// GET /messages
    pub fn list(&self, params: &ListMessagesParams) -> Result<ItemStream<Message>> {
        if params.room_id.is_empty() {
            return Err(WebexError::Config(
                "listing messages requires a room id".to_string(),
            ));
        }
        let url = self.client.endpoint("messages")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// 1:1 messages with a person
    ///
    /// GET /messages/direct
    pub fn list_direct(&self, params: &ListDirectMessagesParams) -> Result<ItemStream<Message>> {
        if params.person_id.is_none() && params.person_email.is_none() {
            return Err(WebexError::Config(
                "direct messages need a person id or email".to_string(),
            ));
        }
        let url = self.client.endpoint("messages/direct")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// Post a message to a room or a person.
    ///
    /// The body must name exactly one recipient.
    ///
    /// POST /messages
    pub async fn create(&self, message: &CreateMessage) -> Result<Message> {
        if message.recipient_count() != 1 {
            return Err(WebexError::Config(
                "a message needs exactly one of room_id, to_person_id, to_person_email"
                    .to_string(),
            ));
        }
        let url = self.client.endpoint("messages")?;
        self.client.post_json(url, message).await
    }

    /// GET /messages/{messageId}
    pub async fn details(&self, message_id: &str) -> Result<Message> {
        let url = self.client.endpoint_segments(&["messages", message_id])?;
        self.client.get_json(url, &[]).await
    }

    /// PUT /messages/{messageId}
    pub async fn edit(&self, message_id: &str, edit: &EditMessage) -> Result<Message> {
        let url = self.client.endpoint_segments(&["messages", message_id])?;
        self.client.put_json(url, &[], edit).await
    }

    /// DELETE /messages/{messageId}
    pub async fn delete(&self, message_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["messages", message_id])?;
        self.client.delete(url, &[]).await
    }
}
