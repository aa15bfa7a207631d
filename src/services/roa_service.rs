use log::debug;

use crate::error::ApiError;
use crate::models::page::estimate_total;
use crate::models::roa::RoasResponse;
use crate::services::api_client::ApiClient;
use crate::utils::start_from_value;

const ROAS_PATH: &str = "/api/roas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoaQuery {
    /// 0-based offset of the first requested record.
    pub start_from: u64,
    pub page_size: u64,
    pub search: Option<String>,
}

impl RoaQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("startFrom", self.start_from.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            params.push(("search", search.clone()));
        }
        params
    }
}

pub async fn get_roas(client: &ApiClient, query: &RoaQuery) -> Result<RoasResponse, ApiError> {
    client.get_json(ROAS_PATH, &query.params()).await
}

/// Offset of the last page, taken from the `startFrom` parameter of the
/// envelope's `last` link.
pub fn last_page_offset(response: &RoasResponse) -> Option<u64> {
    let last = response.links.last.as_deref()?;
    start_from_value(last)?.parse().ok()
}

/// Estimates the total record count by fetching the last page.
///
/// `loaded` is the query that produced `response`; when it already points at
/// the last page its batch is reused instead of fetching it again. Returns
/// `None` when the envelope has no usable last link.
pub async fn estimate_total_roas(
    client: &ApiClient,
    loaded: &RoaQuery,
    response: &RoasResponse,
) -> Result<Option<u64>, ApiError> {
    let Some(offset) = last_page_offset(response) else {
        debug!("No startFrom in last link {:?}", response.links.last);
        return Ok(None);
    };

    if offset == loaded.start_from {
        return Ok(Some(estimate_total(offset, response.data.len())));
    }

    let last_page = get_roas(
        client,
        &RoaQuery {
            start_from: offset,
            ..loaded.clone()
        },
    )
    .await?;
    Ok(Some(estimate_total(offset, last_page.data.len())))
}
