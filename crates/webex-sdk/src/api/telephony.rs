/*
[INPUT]:  Location/queue/person ids, number filters and forwarding settings
[OUTPUT]: Number inventory, call queues and person call forwarding
[POS]:    API layer - Webex Calling configuration (/telephony/config, /people/{id}/features)
[UPDATE]: When more calling features are exposed
*/

use crate::http::params::with_org_id;
use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{
    CallQueue, CallQueueDetails, ListCallQueuesParams, ListNumbersParams, NumberListItem,
    PersonForwarding,
};

#[derive(Debug, Clone, Copy)]
pub struct TelephonyApi<'a> {
    client: &'a WebexClient,
}

impl<'a> TelephonyApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Phone numbers and extensions of the organization
    ///
    /// GET /telephony/config/numbers
    pub fn numbers(&self, params: &ListNumbersParams) -> Result<ItemStream<NumberListItem>> {
        let url = self.client.endpoint("telephony/config/numbers")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "phoneNumbers"))
    }

    /// GET /telephony/config/queues
    pub fn call_queues(&self, params: &ListCallQueuesParams) -> Result<ItemStream<CallQueue>> {
        let url = self.client.endpoint("telephony/config/queues")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "queues"))
    }

    /// GET /telephony/config/locations/{locationId}/queues/{queueId}
    pub async fn call_queue_details(
        &self,
        location_id: &str,
        queue_id: &str,
        org_id: Option<&str>,
    ) -> Result<CallQueueDetails> {
        let url = self.client.endpoint_segments(&[
            "telephony",
            "config",
            "locations",
            location_id,
            "queues",
            queue_id,
        ])?;
        self.client
            .get_json(url, &with_org_id(Vec::new(), org_id))
            .await
    }

    /// GET /people/{personId}/features/callForwarding
    pub async fn person_forwarding(
        &self,
        person_id: &str,
        org_id: Option<&str>,
    ) -> Result<PersonForwarding> {
        let url = self.forwarding_url(person_id)?;
        self.client
            .get_json(url, &with_org_id(Vec::new(), org_id))
            .await
    }

    /// PUT /people/{personId}/features/callForwarding
    pub async fn configure_person_forwarding(
        &self,
        person_id: &str,
        forwarding: &PersonForwarding,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.forwarding_url(person_id)?;
        self.client
            .put_json(url, &with_org_id(Vec::new(), org_id), forwarding)
            .await
    }

    fn forwarding_url(&self, person_id: &str) -> Result<reqwest::Url> {
        self.client
            .endpoint_segments(&["people", person_id, "features", "callForwarding"])
    }
}
