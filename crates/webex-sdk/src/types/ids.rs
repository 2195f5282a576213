/*
[INPUT]:  Webex resource ids and raw UUIDs
[OUTPUT]: Conversions between the two representations
[POS]:    Data layer - id helpers shared by all resources
[UPDATE]: When Webex introduces new id formats
*/

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

const ID_SCHEME: &str = "ciscospark://";
const DEFAULT_CLUSTER: &str = "us";

/// Decoded parts of a Webex id (`ciscospark://<cluster>/<TYPE>/<uuid>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebexId {
    pub cluster: String,
    pub kind: String,
    pub uuid: String,
}

impl WebexId {
    /// Decode a base64 Webex id; returns `None` for anything else
    pub fn parse(id: &str) -> Option<Self> {
        let trimmed = id.trim().trim_end_matches('=');
        let bytes = STANDARD_NO_PAD
            .decode(trimmed)
            .or_else(|_| URL_SAFE_NO_PAD.decode(trimmed))
            .ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        let rest = decoded.strip_prefix(ID_SCHEME)?;

        let mut parts = rest.splitn(3, '/');
        let cluster = parts.next()?.to_string();
        let kind = parts.next()?.to_string();
        let uuid = parts.next()?.to_string();
        if cluster.is_empty() || kind.is_empty() || uuid.is_empty() {
            return None;
        }
        Some(Self {
            cluster,
            kind,
            uuid,
        })
    }

    /// Encode back into the base64 form the API uses
    pub fn encode(&self) -> String {
        let raw = format!("{ID_SCHEME}{}/{}/{}", self.cluster, self.kind, self.uuid);
        STANDARD_NO_PAD.encode(raw.as_bytes())
    }
}

/// UUID part of a Webex id; ids that are already plain UUIDs pass through
pub fn webex_id_to_uuid(id: &str) -> Option<String> {
    match WebexId::parse(id) {
        Some(parsed) => Some(parsed.uuid),
        None if uuid::Uuid::parse_str(id.trim()).is_ok() => Some(id.trim().to_string()),
        None => None,
    }
}

/// Build a Webex id of type `kind` (e.g. `PEOPLE`, `ROOM`) in the US cluster
pub fn uuid_to_webex_id(kind: &str, uuid: &str) -> String {
    WebexId {
        cluster: DEFAULT_CLUSTER.to_string(),
        kind: kind.to_string(),
        uuid: uuid.to_string(),
    }
    .encode()
}
