/*
[INPUT]:  Meeting site tracking codes API schema
[OUTPUT]: Tracking code models and request body
[POS]:    Data layer - admin meeting tracking codes
[UPDATE]: When tracking code options or modes change
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingCodeInputMode {
    Text,
    Select,
    EditableSelect,
    HostProfileSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostProfileCode {
    Optional,
    Required,
    AdminSet,
    NotUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingCodeService {
    All,
    MeetingCenter,
    EventCenter,
    TrainingCenter,
    SupportCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleStartCodeType {
    Optional,
    Required,
    NotUsed,
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCodeOption {
    pub value: String,
    #[serde(default)]
    pub default_value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStartCode {
    pub service: TrackingCodeService,
    #[serde(rename = "type")]
    pub code_type: ScheduleStartCodeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub options: Vec<TrackingCodeOption>,
    #[serde(default)]
    pub input_mode: Option<TrackingCodeInputMode>,
    #[serde(default)]
    pub host_profile_code: Option<HostProfileCode>,
    #[serde(default)]
    pub schedule_start_codes: Vec<ScheduleStartCode>,
}

/// Body for `POST /admin/meeting/config/trackingCodes` and `PUT .../{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCodeSettings {
    pub name: String,
    pub site_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<TrackingCodeOption>,
    pub input_mode: TrackingCodeInputMode,
    pub host_profile_code: HostProfileCode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule_start_codes: Vec<ScheduleStartCode>,
}

/// Envelope of `GET /admin/meeting/config/trackingCodes`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackingCodeList {
    #[serde(default)]
    pub tracking_codes: Vec<TrackingCode>,
}
