/*
[INPUT]:  Recording ids and list filters
[OUTPUT]: Recordings and recording streams
[POS]:    API layer - recordings endpoints (/recordings)
[UPDATE]: When the recordings API gains operations
*/

use crate::api::meetings::host_email_query;
use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ListRecordingsParams, Recording};

#[derive(Debug, Clone, Copy)]
pub struct RecordingsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> RecordingsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /recordings
    pub fn list(&self, params: &ListRecordingsParams) -> Result<ItemStream<Recording>> {
        let url = self.client.endpoint("recordings")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// Details including short-lived direct download links
    ///
    /// GET /recordings/{recordingId}
    pub async fn details(&self, recording_id: &str, host_email: Option<&str>) -> Result<Recording> {
        let url = self.client.endpoint_segments(&["recordings", recording_id])?;
        self.client.get_json(url, &host_email_query(host_email)).await
    }

    /// Move a recording to the recycle bin
    ///
    /// DELETE /recordings/{recordingId}
    pub async fn delete(&self, recording_id: &str, host_email: Option<&str>) -> Result<()> {
        let url = self.client.endpoint_segments(&["recordings", recording_id])?;
        self.client.delete(url, &host_email_query(host_email)).await
    }
}
