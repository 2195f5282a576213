/*
[INPUT]:  Meetings API schema
[OUTPUT]: Meeting models, scheduling bodies and list filters
[POS]:    Data layer - meetings resource
[UPDATE]: When the meetings schema gains fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeetingType {
    MeetingSeries,
    ScheduledMeeting,
    Meeting,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeetingState {
    Active,
    Scheduled,
    Ready,
    Lobby,
    InProgress,
    Ended,
    Missed,
    Expired,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduledType {
    Meeting,
    Webinar,
    PersonalRoomMeeting,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    #[serde(default)]
    pub meeting_series_id: Option<String>,
    #[serde(default)]
    pub scheduled_meeting_id: Option<String>,
    #[serde(default)]
    pub meeting_number: Option<String>,
    pub title: String,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub state: Option<MeetingState>,
    #[serde(default)]
    pub scheduled_type: Option<ScheduledType>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub host_user_id: Option<String>,
    #[serde(default)]
    pub host_display_name: Option<String>,
    #[serde(default)]
    pub host_email: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub web_link: Option<String>,
    #[serde(default)]
    pub sip_address: Option<String>,
    #[serde(default)]
    pub dial_in_ip_address: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub enabled_auto_record_meeting: Option<bool>,
    #[serde(default)]
    pub allow_any_user_to_be_co_host: Option<bool>,
    #[serde(default)]
    pub enabled_join_before_host: Option<bool>,
    #[serde(default)]
    pub join_before_host_minutes: Option<u32>,
    #[serde(default)]
    pub public_meeting: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitee {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_host: Option<bool>,
}

/// Body for `POST /meetings` and `PUT /meetings/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSettings {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_auto_record_meeting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_any_user_to_be_co_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_join_before_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_before_host_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invitees: Vec<Invitee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_type: Option<ScheduledType>,
}

impl MeetingSettings {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            timezone: None,
            agenda: None,
            password: None,
            recurrence: None,
            enabled_auto_record_meeting: None,
            allow_any_user_to_be_co_host: None,
            enabled_join_before_host: None,
            join_before_host_minutes: None,
            invitees: Vec::new(),
            site_url: None,
            host_email: None,
            room_id: None,
            scheduled_type: None,
        }
    }
}

/// Filters for `GET /meetings`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeetingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_series_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MeetingState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_type: Option<ScheduledType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Options for `DELETE /meetings/{id}`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMeetingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
}
