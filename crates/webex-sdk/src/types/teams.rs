/*
[INPUT]:  Teams API schema
[OUTPUT]: Team model and request body
[POS]:    Data layer - teams resource
[UPDATE]: When the teams schema gains fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Body for `POST /teams` and `PUT /teams/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettings {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for `GET /teams`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}
