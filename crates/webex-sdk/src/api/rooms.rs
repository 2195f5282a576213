/*
[INPUT]:  Room ids, list filters and room settings
[OUTPUT]: Rooms, room streams and meeting join details
[POS]:    API layer - rooms endpoints (/rooms)
[UPDATE]: When the rooms API gains operations
*/

use crate::http::{ItemStream, Result, WebexClient, query_pairs};
use crate::types::{ListRoomsParams, Room, RoomMeetingInfo, RoomSettings};

/// Spaces the authenticated user belongs to
#[derive(Debug, Clone, Copy)]
pub struct RoomsApi<'a> {
    client: &'a WebexClient,
}

impl<'a> RoomsApi<'a> {
    pub(crate) fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// GET /rooms
    pub fn list(&self, params: &ListRoomsParams) -> Result<ItemStream<Room>> {
        let url = self.client.endpoint("rooms")?;
        Ok(self
            .client
            .follow_pagination(url, query_pairs(params)?, "items"))
    }

    /// POST /rooms
    pub async fn create(&self, settings: &RoomSettings) -> Result<Room> {
        let url = self.client.endpoint("rooms")?;
        self.client.post_json(url, settings).await
    }

    /// GET /rooms/{roomId}
    pub async fn details(&self, room_id: &str) -> Result<Room> {
        let url = self.client.endpoint_segments(&["rooms", room_id])?;
        self.client.get_json(url, &[]).await
    }

    /// Meeting join details (SIP address, meeting link, call-in numbers)
    ///
    /// GET /rooms/{roomId}/meetingInfo
    pub async fn meeting_info(&self, room_id: &str) -> Result<RoomMeetingInfo> {
        let url = self
            .client
            .endpoint_segments(&["rooms", room_id, "meetingInfo"])?;
        self.client.get_json(url, &[]).await
    }

    /// PUT /rooms/{roomId}
    pub async fn update(&self, room_id: &str, settings: &RoomSettings) -> Result<Room> {
        let url = self.client.endpoint_segments(&["rooms", room_id])?;
        self.client.put_json(url, &[], settings).await
    }

    /// DELETE /rooms/{roomId}
    pub async fn delete(&self, room_id: &str) -> Result<()> {
        let url = self.client.endpoint_segments(&["rooms", room_id])?;
        self.client.delete(url, &[]).await
    }
}
