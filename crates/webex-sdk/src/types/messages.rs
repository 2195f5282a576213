/*
[INPUT]:  Messages API schema
[OUTPUT]: Message model, create/edit bodies and list filters
[POS]:    Data layer - messages resource
[UPDATE]: When the messages schema gains fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rooms::RoomType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default)]
    pub to_person_id: Option<String>,
    #[serde(default)]
    pub to_person_email: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub mentioned_people: Vec<String>,
    #[serde(default)]
    pub mentioned_groups: Vec<String>,
    /// Adaptive card attachments, kept as raw JSON
    #[serde(default)]
    pub attachments: Vec<Value>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_voice_clip: Option<bool>,
}

/// Body for `POST /messages`
///
/// Exactly one of `room_id`, `to_person_id` or `to_person_email` addresses
/// the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Value>,
}

impl CreateMessage {
    /// Plain text message to a room
    pub fn to_room(room_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Plain text direct message to a person by email
    pub fn to_email(email: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to_person_email: Some(email.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Number of recipient fields set
    pub(crate) fn recipient_count(&self) -> usize {
        [
            self.room_id.is_some(),
            self.to_person_id.is_some(),
            self.to_person_email.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Body for `PUT /messages/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditMessage {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

/// Filters for `GET /messages`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesParams {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned_people: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Filters for `GET /messages/direct`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDirectMessagesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
}
