/*
[INPUT]:  A configured WebexClient session
[OUTPUT]: Per-resource API views with one typed method per endpoint
[POS]:    API layer - resource groupings over the shared session
[UPDATE]: When adding a resource group
*/

pub mod devices;
pub mod locations;
pub mod meetings;
pub mod memberships;
pub mod messages;
pub mod people;
pub mod recordings;
pub mod rooms;
pub mod scim;
pub mod teams;
pub mod telephony;
pub mod tracking_codes;
pub mod webhooks;
pub mod workspaces;

pub use devices::DevicesApi;
pub use locations::LocationsApi;
pub use meetings::MeetingsApi;
pub use memberships::MembershipsApi;
pub use messages::MessagesApi;
pub use people::PeopleApi;
pub use recordings::RecordingsApi;
pub use rooms::RoomsApi;
pub use scim::ScimUsersApi;
pub use teams::TeamsApi;
pub use telephony::TelephonyApi;
pub use tracking_codes::TrackingCodesApi;
pub use webhooks::WebhooksApi;
pub use workspaces::WorkspacesApi;

use crate::http::WebexClient;

impl WebexClient {
    pub fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    pub fn rooms(&self) -> RoomsApi<'_> {
        RoomsApi::new(self)
    }

    pub fn memberships(&self) -> MembershipsApi<'_> {
        MembershipsApi::new(self)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(self)
    }

    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi::new(self)
    }

    pub fn webhooks(&self) -> WebhooksApi<'_> {
        WebhooksApi::new(self)
    }

    pub fn locations(&self) -> LocationsApi<'_> {
        LocationsApi::new(self)
    }

    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    pub fn workspaces(&self) -> WorkspacesApi<'_> {
        WorkspacesApi::new(self)
    }

    pub fn meetings(&self) -> MeetingsApi<'_> {
        MeetingsApi::new(self)
    }

    pub fn recordings(&self) -> RecordingsApi<'_> {
        RecordingsApi::new(self)
    }

    pub fn tracking_codes(&self) -> TrackingCodesApi<'_> {
        TrackingCodesApi::new(self)
    }

    /// SCIM 2.0 users of organization `org_id`
    pub fn scim_users<'a>(&'a self, org_id: &'a str) -> ScimUsersApi<'a> {
        ScimUsersApi::new(self, org_id)
    }

    pub fn telephony(&self) -> TelephonyApi<'_> {
        TelephonyApi::new(self)
    }
}
