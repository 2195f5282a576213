/*
[INPUT]:  Meeting ids, list filters and meeting settings
[OUTPUT]: Meetings and meeting streams
[POS]:    API layer - meetings endpoints (/meetings)
[UPDATE]: When the meetings API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{DeleteMeetingParams, ListMeetingsParams, Meeting, MeetingSettings};

#[derive(Debug, Clone, Copy)]
pub struct MeetingsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> MeetingsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /meetings
    pub fn list(&self, params: &ListMeetingsParams) -> Result<ItemStream<Meeting>> {
        let url = self.client.endpoint("meetings")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// Details of a meeting; admins pass `host_email` to act on behalf of a host
    ///
    /// GET /meetings/{meetingId}
    pub async fn details(&self, meeting_id: &str, host_email: Option<&str>) -> Result<Meeting> {
        let url = self.client.endpoint_segments(&["meetings", meeting_id])?;
        self.client.get_json(url, &host_email_query(host_email)).await
    }

    /// POST /meetings
    pub async fn create(&self, settings: &MeetingSettings) -> Result<Meeting> {
        let url = self.client.endpoint("meetings")?;
        self.client.post_json(url, settings).await
    }

    /// PUT /meetings/{meetingId}
    pub async fn update(&self, meeting_id: &str, settings: &MeetingSettings) -> Result<Meeting> {
        let url = self.client.endpoint_segments(&["meetings", meeting_id])?;
        self.client.put_json(url, &[], settings).await
    }

    /// DELETE /meetings/{meetingId}
    pub async fn delete(&self, meeting_id: &str, params: &DeleteMeetingParams) -> Result<()> {
        let url = self.client.endpoint_segments(&["meetings", meeting_id])?;
        self.client.delete(url, &query_pairs(params)?).await
    }
}

pub(crate) fn host_email_query(host_email: Option<&str>) -> Vec<(String, String)> {
    host_email
        .map(|email| vec![("hostEmail".to_string(), email.to_string())])
        .unwrap_or_default()
}
