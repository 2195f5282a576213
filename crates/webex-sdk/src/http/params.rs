/*
[INPUT]:  Typed list/filter parameter structs
[OUTPUT]: Flat query string pairs for reqwest
[POS]:    HTTP layer - query parameter encoding shared by all endpoints
[UPDATE]: When parameter structs gain non-scalar field types
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{Result, WebexError};

/// Query string pairs as sent on the wire
pub type QueryPairs = Vec<(String, String)>;

/// Flatten a serializable parameter struct into query pairs.
///
/// `None` fields are dropped, lists are joined with commas the way Webex
/// expects multi-valued filters.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<QueryPairs> {
    let value = serde_json::to_value(params)?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(WebexError::Config(format!(
                "query parameters must serialize to an object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Some(rendered) = render_scalar(value)? {
            pairs.push((key, rendered));
        }
    }
    Ok(pairs)
}

fn render_scalar(value: Value) -> Result<Option<String>> {
    let rendered = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = render_scalar(item)? {
                    parts.push(part);
                }
            }
            if parts.is_empty() {
                return Ok(None);
            }
            parts.join(",")
        }
        Value::Object(_) => serde_json::to_string(&value)?,
    };
    Ok(Some(rendered))
}

/// Append an `orgId` pair when one is given
pub(crate) fn with_org_id(mut pairs: QueryPairs, org_id: Option<&str>) -> QueryPairs {
    if let Some(org_id) = org_id {
        pairs.push(("orgId".to_string(), org_id.to_string()));
    }
    pairs
}
