/*
[INPUT]:  Recordings API schema
[OUTPUT]: Recording models and list filters
[POS]:    Data layer - meeting recordings resource
[UPDATE]: When the recordings schema gains fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingFormat {
    #[serde(rename = "MP4")]
    Mp4,
    #[serde(rename = "ARF")]
    Arf,
    #[serde(rename = "UPLOADED")]
    Uploaded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingServiceType {
    MeetingCenter,
    EventCenter,
    SupportCenter,
    TrainingCenter,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingStatus {
    Available,
    Deleted,
    Purged,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryDirectDownloadLinks {
    #[serde(default)]
    pub recording_download_link: Option<String>,
    #[serde(default)]
    pub audio_download_link: Option<String>,
    #[serde(default)]
    pub transcript_download_link: Option<String>,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub id: String,
    #[serde(default)]
    pub meeting_id: Option<String>,
    #[serde(default)]
    pub scheduled_meeting_id: Option<String>,
    #[serde(default)]
    pub meeting_series_id: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_recorded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub host_display_name: Option<String>,
    #[serde(default)]
    pub host_email: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub playback_url: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub temporary_direct_download_links: Option<TemporaryDirectDownloadLinks>,
    #[serde(default)]
    pub format: Option<RecordingFormat>,
    #[serde(default)]
    pub service_type: Option<RecordingServiceType>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub share_to_me: Option<bool>,
    #[serde(default)]
    pub integration_tags: Vec<String>,
    #[serde(default)]
    pub status: Option<RecordingStatus>,
}

/// Filters for `GET /recordings`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<RecordingFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<RecordingServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}
