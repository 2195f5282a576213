/*
[INPUT]:  First-page URL, query parameters and the JSON key holding items
[OUTPUT]: Lazily fetched, flattened item streams
[POS]:    HTTP layer - pagination following (Link header and SCIM paging)
[UPDATE]: When Webex changes paging conventions or new list shapes appear
*/

use std::pin::Pin;

use async_stream::stream;
use futures_util::Stream;
use reqwest::header::{HeaderMap, LINK};
use reqwest::{Method, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::client::decode_json;
use crate::http::{Result, WebexClient, WebexError};

/// Boxed stream of items produced by the pagination followers
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// One fetched page: raw items plus the link to the next page
struct Page {
    items: Vec<Value>,
    next: Option<Url>,
}

/// SCIM 2.0 list response envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScimPage {
    total_results: Option<u64>,
    items_per_page: Option<u64>,
    start_index: Option<u64>,
    #[serde(rename = "Resources", default)]
    resources: Vec<Value>,
}

impl WebexClient {
    /// Follow `Link: <...>; rel="next"` pagination starting at `url`.
    ///
    /// `params` only apply to the first request; next links already carry
    /// the full query. Items under `item_key` are yielded one at a time and
    /// the next page is not requested until the current one is drained.
    pub fn follow_pagination<T>(
        &self,
        url: Url,
        params: Vec<(String, String)>,
        item_key: &'static str,
    ) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        Box::pin(stream! {
            let mut next_url = Some(url);
            let mut query = params;
            while let Some(url) = next_url.take() {
                let page = match client.fetch_page(url, &query, item_key).await {
                    Ok(page) => page,
                    Err(err) => {
                        yield Err(err);
                        return;
                    }
                };
                query.clear();
                next_url = page.next;
                for item in page.items {
                    match serde_json::from_value::<T>(item) {
                        Ok(item) => yield Ok(item),
                        Err(err) => {
                            yield Err(WebexError::from(err));
                            return;
                        }
                    }
                }
            }
        })
    }

    /// Follow SCIM 2.0 `startIndex`/`count` paging.
    ///
    /// Stops on an empty page or once `startIndex + itemsPerPage` passes
    /// `totalResults`.
    pub fn follow_scim_pagination<T>(
        &self,
        url: Url,
        params: Vec<(String, String)>,
        count: u32,
    ) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        Box::pin(stream! {
            let mut start_index: u64 = 1;
            loop {
                let mut query = params.clone();
                query.push(("startIndex".to_string(), start_index.to_string()));
                query.push(("count".to_string(), count.to_string()));

                let page: ScimPage = match client.get_json(url.clone(), &query).await {
                    Ok(page) => page,
                    Err(err) => {
                        yield Err(err);
                        return;
                    }
                };

                let received = page.resources.len() as u64;
                for item in page.resources {
                    match serde_json::from_value::<T>(item) {
                        Ok(item) => yield Ok(item),
                        Err(err) => {
                            yield Err(WebexError::from(err));
                            return;
                        }
                    }
                }

                if received == 0 {
                    return;
                }
                let per_page = page.items_per_page.filter(|n| *n > 0).unwrap_or(received);
                start_index = page.start_index.unwrap_or(start_index) + per_page;
                match page.total_results {
                    Some(total) if start_index > total => return,
                    _ => {}
                }
            }
        })
    }

    async fn fetch_page(
        &self,
        url: Url,
        query: &[(String, String)],
        item_key: &str,
    ) -> Result<Page> {
        let response = self.execute(Method::GET, url, query, None).await?;
        let next = parse_next_link(response.headers(), self.base_url());
        let body: Value = decode_json(response).await?;
        let items = page_items(body, item_key)?;
        Ok(Page { items, next })
    }
}

fn page_items(body: Value, item_key: &str) -> Result<Vec<Value>> {
    let mut body = match body {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(WebexError::InvalidResponse(format!(
                "expected a JSON object page, got {other}"
            )));
        }
    };

    match body.remove(item_key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(WebexError::InvalidResponse(format!(
            "page field '{item_key}' is not an array"
        ))),
    }
}

/// Extract the `rel="next"` target from RFC 8288 `Link` headers.
///
/// Relative targets are resolved against `base`.
pub fn parse_next_link(headers: &HeaderMap, base: &Url) -> Option<Url> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(split_link_values)
        .find_map(|entry| next_target(&entry))
        .and_then(|target| base.join(&target).ok())
}

/// Split a header value on commas that sit outside `<...>`
fn split_link_values(value: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut in_target = false;
    for ch in value.chars() {
        match ch {
            '<' => {
                in_target = true;
                current.push(ch);
            }
            '>' => {
                in_target = false;
                current.push(ch);
            }
            ',' if !in_target => entries.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    entries.push(current);
    entries
}

fn next_target(entry: &str) -> Option<String> {
    let mut parts = entry.split(';');
    let target = parts.next()?.trim();
    let target = target.strip_prefix('<')?.strip_suffix('>')?;

    let is_next = parts.any(|param| {
        let Some((name, value)) = param.split_once('=') else {
            return false;
        };
        name.trim().eq_ignore_ascii_case("rel")
            && value
                .trim()
                .trim_matches('"')
                .split_ascii_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("next"))
    });

    is_next.then(|| target.to_string())
}
