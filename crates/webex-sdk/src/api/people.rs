/*
[INPUT]:  Person ids, list filters and person bodies
[OUTPUT]: Person records and person streams
[POS]:    API layer - people endpoints (/people)
[UPDATE]: When the people API gains operations
*/

use reqwest::Method;

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ListPeopleParams, Person};

/// People in the organization
#[derive(Debug, Clone, Copy)]
pub struct PeopleApi<'a> {
    client: &'a WebexClient,
}

impl<'a> PeopleApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Details of the authenticated user
    ///
    /// GET /people/me
    pub async fn me(&self) -> Result<Person> {
        let url = self.client.endpoint("people/me")?;
        self.client.get_json(url, &[]).await
    }

    /// List people matching `params`
    ///
    /// GET /people
    pub fn list(&self, params: &ListPeopleParams) -> Result<ItemStream<Person>> {
        let url = self.client.endpoint("people")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// GET /people/{personId}
    pub async fn details(&self, person_id: &str, calling_data: bool) -> Result<Person> {
        let url = self.client.endpoint_segments(&["people", person_id])?;
        self.client.get_json(url, &calling_data_query(calling_data)).await
    }

    /// Create a person; admin only
    ///
    /// POST /people
    pub async fn create(&self, person: &Person, calling_data: bool) -> Result<Person> {
        let url = self.client.endpoint("people")?;
        let body = serde_json::to_value(person)?;
        self.client
            .request_json(Method::POST, url, &calling_data_query(calling_data), Some(&body))
            .await
    }

    /// Replace a person's settings. Fields left unset are cleared by Webex,
    /// so start from [`Self::details`] when changing a single attribute.
    ///
    /// PUT /people/{personId}
    pub async fn update(
        &self,
        person_id: &str,
        person: &Person,
        calling_data: bool,
    ) -> Result<Person> {
        let url = self.client.endpoint_segments(&["people", person_id])?;
        self.client
            .put_json(url, &calling_data_query(calling_data), person)
            .await
    }

    /// DELETE /people/{personId}
    pub async fn delete(&self, person_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["people", person_id])?;
        self.client.delete(url, &[]).await
    }
}

fn calling_data_query(calling_data: bool) -> Vec<(String, String)> {
    if calling_data {
        vec![("callingData".to_string(), "true".to_string())]
    } else {
        Vec::new()
    }
}
