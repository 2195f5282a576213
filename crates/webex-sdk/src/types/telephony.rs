/*
[INPUT]:  Webex Calling configuration API schema
[OUTPUT]: Number inventory, call queue and call forwarding models
[POS]:    Data layer - calling configuration (telephony/config, person features)
[UPDATE]: When calling configuration endpoints are added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdAndName {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberState {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerType {
    People,
    Place,
    VirtualLine,
    AutoAttendant,
    CallQueue,
    GroupPaging,
    HuntGroup,
    VoiceMessaging,
    VoicemailGroup,
    BroadworksAnywhere,
    ContactCenterLink,
    RoutePoint,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOwner {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub owner_type: Option<OwnerType>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Entry of `GET /telephony/config/numbers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberListItem {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub routing_prefix: Option<String>,
    #[serde(default)]
    pub esn: Option<String>,
    #[serde(default)]
    pub state: Option<NumberState>,
    #[serde(default)]
    pub phone_number_type: Option<String>,
    #[serde(default)]
    pub main_number: bool,
    #[serde(default)]
    pub included_telephony_types: Option<String>,
    #[serde(default)]
    pub mobile_network: Option<String>,
    #[serde(default)]
    pub toll_free_number: bool,
    #[serde(default)]
    pub location: Option<IdAndName>,
    #[serde(default)]
    pub owner: Option<NumberOwner>,
}

/// Filters for `GET /telephony/config/numbers`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNumbersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NumberState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_free_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Entry of `GET /telephony/config/queues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Filters for `GET /telephony/config/queues`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCallQueuesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueAgent {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(rename = "type", default)]
    pub agent_type: Option<OwnerType>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub join_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSettings {
    pub queue_size: u32,
    #[serde(default)]
    pub call_offer_tone_enabled: Option<bool>,
    #[serde(default)]
    pub reset_call_statistics_enabled: Option<bool>,
    #[serde(default)]
    pub overflow: Option<serde_json::Value>,
}

/// `GET /telephony/config/locations/{locationId}/queues/{queueId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueueDetails {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub queue_settings: Option<QueueSettings>,
    #[serde(default)]
    pub agents: Vec<QueueAgent>,
    #[serde(default)]
    pub allow_agent_join_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingRule {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_reminder_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_voicemail_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoAnswerForwardingRule {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_rings: Option<u32>,
    /// Read-only upper bound reported by the server
    #[serde(default, skip_serializing)]
    pub system_max_number_of_rings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_voicemail_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallForwarding {
    pub always: ForwardingRule,
    pub busy: ForwardingRule,
    pub no_answer: NoAnswerForwardingRule,
}

/// `GET/PUT /people/{personId}/features/callForwarding`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForwarding {
    pub call_forwarding: CallForwarding,
    pub business_continuity: ForwardingRule,
}
