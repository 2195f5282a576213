/*
[INPUT]:  Webex API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new resources are added
*/

pub mod devices;
pub mod ids;
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

pub use devices::*;
pub use ids::*;
pub use locations::*;
pub use meetings::*;
pub use memberships::*;
pub use messages::*;
pub use people::*;
pub use recordings::*;
pub use rooms::*;
pub use scim::*;
pub use teams::*;
pub use telephony::*;
pub use tracking_codes::{
    HostProfileCode, ScheduleStartCode, ScheduleStartCodeType, TrackingCode,
    TrackingCodeInputMode, TrackingCodeOption, TrackingCodeService, TrackingCodeSettings,
};
pub use webhooks::*;
pub use workspaces::*;
