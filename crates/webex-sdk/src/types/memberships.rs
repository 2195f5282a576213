/*
[INPUT]:  Memberships API schema
[OUTPUT]: Membership models, request bodies and list filters
[POS]:    Data layer - room memberships resource
[UPDATE]: When the memberships schema gains fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rooms::RoomType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub room_id: String,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub person_display_name: Option<String>,
    #[serde(default)]
    pub person_org_id: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default)]
    pub is_monitor: bool,
    #[serde(default)]
    pub is_room_hidden: Option<bool>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Body for `POST /memberships`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembership {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
}

/// Body for `PUT /memberships/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_room_hidden: Option<bool>,
}

/// Filters for `GET /memberships`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembershipsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}
