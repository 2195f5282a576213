/*
[INPUT]:  Location ids, list filters and location bodies
[OUTPUT]: Locations, location streams and created ids
[POS]:    API layer - locations endpoints (/locations)
[UPDATE]: When the locations API gains operations
*/

use reqwest::Method;

use crate::http::params::with_org_id;
use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{CreateLocation, CreatedId, ListLocationsParams, Location, UpdateLocation};

#[derive(Debug, Clone, Copy)]
pub struct LocationsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> LocationsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /locations
    pub fn list(&self, params: &ListLocationsParams) -> Result<ItemStream<Location>> {
        let url = self.client.endpoint("locations")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// GET /locations/{locationId}
    pub async fn details(&self, location_id: &str, org_id: Option<&str>) -> Result<Location> {
        let url = self.client.endpoint_segments(&["locations", location_id])?;
        self.client
            .get_json(url, &with_org_id(Vec::new(), org_id))
            .await
    }

    /// Create a location and return its id
    ///
    /// POST /locations
    pub async fn create(&self, location: &CreateLocation, org_id: Option<&str>) -> Result<String> {
        let url = self.client.endpoint("locations")?;
        let body = serde_json::to_value(location)?;
        let created: CreatedId = self
            .client
            .request_json(
                Method::POST,
                url,
                &with_org_id(Vec::new(), org_id),
                Some(&body),
            )
            .await?;
        Ok(created.id)
    }

    /// PUT /locations/{locationId}
    pub async fn update(
        &self,
        location_id: &str,
        update: &UpdateLocation,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.client.endpoint_segments(&["locations", location_id])?;
        let body = serde_json::to_value(update)?;
        self.client
            .request_empty(
                Method::PUT,
                url,
                &with_org_id(Vec::new(), org_id),
                Some(&body),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use futures_util::TryStreamExt;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;
    use crate::types::{CreateLocation, ListLocationsParams, LocationAddress, UpdateLocation};

    fn location_json() -> serde_json::Value {
        json!({
            "id": "l1",
            "name": "Headquarters",
            "orgId": "org-1",
            "timeZone": "America/Los_Angeles",
            "preferredLanguage": "en_us",
            "address": {
                "address1": "1 Main St",
                "city": "San Jose",
                "state": "CA",
                "postalCode": "95134",
                "country": "US"
            }
        })
    }

    #[tokio::test]
    async fn test_list_and_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locations"))
            .and(query_param("name", "Headquarters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [location_json()]})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/l1"))
            .and(query_param("orgId", "org-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(location_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = ListLocationsParams {
            name: Some("Headquarters".to_string()),
            ..ListLocationsParams::default()
        };
        let locations: Vec<_> = client
            .locations()
            .list(&params)
            .expect("list failed")
            .try_collect()
            .await
            .expect("stream failed");
        assert_eq!(locations.len(), 1);

        let location = client
            .locations()
            .details("l1", Some("org-1"))
            .await
            .expect("details failed");
        let address = location.address.expect("address missing");
        assert_eq!(address.city, "San Jose");
    }

    #[tokio::test]
    async fn test_create_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/locations"))
            .and(body_partial_json(json!({
                "name": "Branch",
                "timeZone": "Europe/Berlin",
                "address": {"city": "Berlin", "country": "DE"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "l2"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let location = CreateLocation {
            name: "Branch".to_string(),
            time_zone: "Europe/Berlin".to_string(),
            preferred_language: "de_de".to_string(),
            announcement_language: "de_de".to_string(),
            address: LocationAddress {
                address1: "Alexanderplatz 1".to_string(),
                city: "Berlin".to_string(),
                postal_code: "10178".to_string(),
                country: "DE".to_string(),
                ..LocationAddress::default()
            },
            ..CreateLocation::default()
        };
        let id = client
            .locations()
            .create(&location, None)
            .await
            .expect("create failed");
        assert_eq!(id, "l2");
    }

    #[tokio::test]
    async fn test_update_accepts_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/locations/l1"))
            .and(body_partial_json(json!({"name": "Renamed"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let update = UpdateLocation {
            name: Some("Renamed".to_string()),
            ..UpdateLocation::default()
        };
        client
            .locations()
            .update("l1", &update, None)
            .await
            .expect("update failed");
    }
}
