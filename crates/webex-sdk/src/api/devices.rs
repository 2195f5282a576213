/*
[INPUT]:  Device ids, list filters and activation requests
[OUTPUT]: Devices, device streams and activation codes
[POS]:    API layer - devices endpoints (/devices)
[UPDATE]: When the devices API gains operations
*/

use reqwest::Method;

use crate::http::params::with_org_id;
use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ActivationCode, ActivationCodeRequest, Device, ListDevicesParams};

#[derive(Debug, Clone, Copy)]
pub struct DevicesApi<'a> {
    client: &'a WebexClient,
}

impl<'a> DevicesApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /devices
    pub fn list(&self, params: &ListDevicesParams) -> Result<ItemStream<Device>> {
        let url = self.client.endpoint("devices")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// GET /devices/{deviceId}
    pub async fn details(&self, device_id: &str, org_id: Option<&str>) -> Result<Device> {
        let url = self.client.endpoint_segments(&["devices", device_id])?;
        self.client
            .get_json(url, &with_org_id(Vec::new(), org_id))
            .await
    }

    /// DELETE /devices/{deviceId}
    pub async fn delete(&self, device_id: &str, org_id: Option<&str>) -> Result<()> {
        let url = self.client.endpoint_segments(&["devices", device_id])?;
        self.client
            .delete(url, &with_org_id(Vec::new(), org_id))
            .await
    }

    /// Generate an activation code for a workspace or person
    ///
    /// POST /devices/activationCode
    pub async fn activation_code(
        &self,
        request: &ActivationCodeRequest,
        org_id: Option<&str>,
    ) -> Result<ActivationCode> {
        let url = self.client.endpoint("devices/activationCode")?;
        let body = serde_json::to_value(request)?;
        self.client
            .request_json(
                Method::POST,
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
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;
    use crate::types::{ActivationCodeRequest, ConnectionStatus, ListDevicesParams};

    fn device_json() -> serde_json::Value {
        json!({
            "id": "d1",
            "displayName": "Board 55",
            "workspaceId": "ws1",
            "orgId": "org-1",
            "capabilities": ["xapi"],
            "permissions": ["xapi:readonly"],
            "connectionStatus": "connected",
            "product": "Cisco Webex Board 55",
            "type": "roomdesk",
            "tags": ["lobby"],
            "serial": "FOC123",
            "software": "RoomOS 11",
            "created": "2024-01-01T00:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_list_by_tag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .and(query_param("tag", "lobby,floor1"))
            .and(query_param("connectionStatus", "connected"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [device_json()]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = ListDevicesParams {
            tag: vec!["lobby".to_string(), "floor1".to_string()],
            connection_status: Some(ConnectionStatus::Connected),
            ..ListDevicesParams::default()
        };
        let devices: Vec<_> = client
            .devices()
            .list(&params)
            .expect("list failed")
            .try_collect()
            .await
            .expect("stream failed");

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].connection_status, Some(ConnectionStatus::Connected));
        assert_eq!(devices[0].tags, vec!["lobby".to_string()]);
    }

    #[tokio::test]
    async fn test_details_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices/d1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(device_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/devices/d1"))
            .and(query_param("orgId", "org-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let device = client.devices().details("d1", None).await.expect("details failed");
        assert_eq!(device.display_name, "Board 55");
        client
            .devices()
            .delete("d1", Some("org-1"))
            .await
            .expect("delete failed");
    }

    #[tokio::test]
    async fn test_activation_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/devices/activationCode"))
            .and(body_json(json!({"workspaceId": "ws1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "5414011256173816",
                "expiryTime": "2024-06-01T00:00:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ActivationCodeRequest {
            workspace_id: Some("ws1".to_string()),
            ..ActivationCodeRequest::default()
        };
        let code = client
            .devices()
            .activation_code(&request, None)
            .await
            .expect("activation code failed");
        assert_eq!(code.code, "5414011256173816");
        assert!(code.expiry_time.is_some());
    }
}
