/*
[INPUT]:  Meeting site URL, tracking code ids and settings
[OUTPUT]: Tracking codes of a meeting site
[POS]:    API layer - admin tracking code endpoints (/admin/meeting/config/trackingCodes)
[UPDATE]: When tracking code administration gains operations
*/

use crate::http::{Result, WebexClient};
use crate::types::tracking_codes::TrackingCodeList;
use crate::types::{TrackingCode, TrackingCodeSettings};

const BASE_SEGMENTS: [&str; 4] = ["admin", "meeting", "config", "trackingCodes"];

/// Tracking codes are scoped to one Webex meeting site.
#[derive(Debug, Clone, Copy)]
pub struct TrackingCodesApi<'a> {
    client: &'a WebexClient,
}

impl<'a> TrackingCodesApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// All tracking codes of a site; the endpoint is not paginated
    ///
    /// GET /admin/meeting/config/trackingCodes?siteUrl={siteUrl}
    pub async fn list(&self, site_url: &str) -> Result<Vec<TrackingCode>> {
        let url = self.client.endpoint_segments(&BASE_SEGMENTS)?;
        let list: TrackingCodeList = self.client.get_json(url, &site_query(site_url)).await?;
        Ok(list.tracking_codes)
    }

    /// GET /admin/meeting/config/trackingCodes/{trackingCodeId}
    pub async fn details(&self, tracking_code_id: &str, site_url: &str) -> Result<TrackingCode> {
        let url = self.code_url(tracking_code_id)?;
        self.client.get_json(url, &site_query(site_url)).await
    }

    /// Create a tracking code on `settings.site_url`
    ///
    /// POST /admin/meeting/config/trackingCodes
    pub async fn create(&self, settings: &TrackingCodeSettings) -> Result<TrackingCode> {
        let url = self.client.endpoint_segments(&BASE_SEGMENTS)?;
        self.client.post_json(url, settings).await
    }

    /// PUT /admin/meeting/config/trackingCodes/{trackingCodeId}
    pub async fn update(
        &self,
        tracking_code_id: &str,
        settings: &TrackingCodeSettings,
    ) -> Result<TrackingCode> {
        let url = self.code_url(tracking_code_id)?;
        self.client.put_json(url, &[], settings).await
    }

    /// DELETE /admin/meeting/config/trackingCodes/{trackingCodeId}?siteUrl={siteUrl}
    pub async fn delete(&self, tracking_code_id: &str, site_url: &str) -> Result<()> {
        let url = self.code_url(tracking_code_id)?;
        self.client.delete(url, &site_query(site_url)).await
    }

    fn code_url(&self, tracking_code_id: &str) -> Result<reqwest::Url> {
        let [a, b, c, d] = BASE_SEGMENTS;
        self.client
            .endpoint_segments(&[a, b, c, d, tracking_code_id])
    }
}

fn site_query(site_url: &str) -> Vec<(String, String)> {
    vec![("siteUrl".to_string(), site_url.to_string())]
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;
    use crate::types::{
        HostProfileCode, TrackingCodeInputMode, TrackingCodeOption, TrackingCodeSettings,
    };

    const SITE: &str = "example.webex.com";
    const CODES_PATH: &str = "/admin/meeting/config/trackingCodes";

    fn code_json() -> serde_json::Value {
        json!({
            "id": "tc1",
            "name": "Department",
            "siteUrl": SITE,
            "options": [
                {"value": "Sales", "defaultValue": true},
                {"value": "Engineering", "defaultValue": false}
            ],
            "inputMode": "select",
            "hostProfileCode": "required",
            "scheduleStartCodes": [
                {"service": "meetingCenter", "type": "required"}
            ]
        })
    }

    #[tokio::test]
    async fn test_list_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CODES_PATH))
            .and(query_param("siteUrl", SITE))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"trackingCodes": [code_json()]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let codes = client.tracking_codes().list(SITE).await.expect("list failed");

        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].input_mode, Some(TrackingCodeInputMode::Select));
        assert_eq!(codes[0].options.len(), 2);
        assert!(codes[0].options[0].default_value);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let server = MockServer::start().await;
        let expected_body = json!({
            "name": "Department",
            "siteUrl": SITE,
            "options": [{"value": "Sales", "defaultValue": true}],
            "inputMode": "select",
            "hostProfileCode": "required"
        });
        Mock::given(method("POST"))
            .and(path(CODES_PATH))
            .and(body_json(expected_body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(code_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(format!("{CODES_PATH}/tc1")))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(code_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{CODES_PATH}/tc1")))
            .and(query_param("siteUrl", SITE))
            .respond_with(ResponseTemplate::new(200).set_body_json(code_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("{CODES_PATH}/tc1")))
            .and(query_param("siteUrl", SITE))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let settings = TrackingCodeSettings {
            name: "Department".to_string(),
            site_url: SITE.to_string(),
            options: vec![TrackingCodeOption {
                value: "Sales".to_string(),
                default_value: true,
            }],
            input_mode: TrackingCodeInputMode::Select,
            host_profile_code: HostProfileCode::Required,
            schedule_start_codes: Vec::new(),
        };

        let created = client.tracking_codes().create(&settings).await.expect("create failed");
        assert_eq!(created.id, "tc1");
        client
            .tracking_codes()
            .update("tc1", &settings)
            .await
            .expect("update failed");
        let details = client
            .tracking_codes()
            .details("tc1", SITE)
            .await
            .expect("details failed");
        assert_eq!(details.host_profile_code, Some(HostProfileCode::Required));
        client
            .tracking_codes()
            .delete("tc1", SITE)
            .await
            .expect("delete failed");
    }
}
