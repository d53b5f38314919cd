use crate::error::{Result, SpiderError};
use crate::fs::write_json;
use crate::http::*;
use chrono::{NaiveDateTime, Timelike};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Every index the NSE publishes, in one response.
pub const ALL_INDICES_URL: &str = "https://www.nseindia.com/api/allIndices";

/// The NSE rejects requests that don't look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// How long one request may take, connecting included, before the fetch gives up.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Keywords marking an index as sectoral. Matched as plain substrings, so `AUTO` also matches
/// e.g. `AUTOMOBILE`.
pub const SECTORS: [&str; 8] = [
    "BANK", "IT", "PHARMA", "AUTO", "METAL", "ENERGY", "FMCG", "REALTY",
];

// scrape
// ----------------------------------------------------------------------------

/// Fetch, filter & save the sectoral indices to `path`.
///
/// Every failure is logged and turned into `false`; `path` is only touched once there is at
/// least one sectoral index to write.
pub async fn scrape(http_client: &HttpClient, url: &str, path: impl AsRef<Path>) -> bool {
    let time = std::time::Instant::now();

    let raw = match fetch(http_client, url).await {
        Ok(raw) => raw,
        Err(_) => {
            error!("failed to fetch NSE data");
            return false;
        }
    };

    let captured_at = chrono::Local::now().naive_local();
    let indices = match filter(&raw, captured_at) {
        Ok(indices) if !indices.is_empty() => indices,
        Ok(_) => {
            error!("failed to process sectoral data, error(no sectoral indices in response)");
            return false;
        }
        Err(err) => {
            error!("failed to process sectoral data, error({err})");
            return false;
        }
    };

    if write_json(path, &indices).await.is_err() {
        return false;
    }

    info!(
        "successfully processed {} sectoral indices. {}",
        indices.len(),
        crate::time_elapsed(time)
    );
    true
}

/// Build the HTTP client with browser-like headers; `USER_AGENT` (env or `.env`) overrides
/// [`DEFAULT_USER_AGENT`]. Requests time out after [`REQUEST_TIMEOUT`].
pub fn build_client() -> Result<HttpClient> {
    build_client_with_timeout(REQUEST_TIMEOUT)
}

/// [`build_client`], with its own request `timeout`.
pub fn build_client_with_timeout(timeout: Duration) -> Result<HttpClient> {
    let user_agent = var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    trace!("building http client with user agent: {user_agent}");

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent)?);

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// One GET request to `url`; non-2xx statuses and malformed bodies are errors.
pub async fn fetch(http_client: &HttpClient, url: &str) -> Result<Value> {
    debug!("fetching {url}");
    let data: Value = http_client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| {
            error!("error fetching NSE data, error({err})");
            err
        })?
        .json()
        .await
        .map_err(|err| {
            error!("error deserializing NSE data, error({err})");
            err
        })?;

    info!("successfully fetched NSE data at {}", chrono::Local::now());
    Ok(data)
}

/// Keep the sectoral entries of a raw `allIndices` response, in the order the NSE sent them,
/// each stamped with `captured_at`.
pub fn filter(raw: &Value, captured_at: NaiveDateTime) -> Result<Vec<SectoralIndex>> {
    // serde would also accept a struct written as a sequence
    if !raw.is_object() {
        return Err(SpiderError::Shape("response is not a JSON object".to_string()));
    }
    let response = AllIndices::deserialize(raw).map_err(|err| SpiderError::Shape(err.to_string()))?;
    trace!("{} indices in response", response.data.len());

    let timestamp = iso_timestamp(&captured_at);
    let indices: Vec<SectoralIndex> = response
        .data
        .into_iter()
        .filter(|entry| is_sectoral(&entry.index))
        .map(|entry| SectoralIndex {
            index: entry.index,
            last: entry.last,
            change: entry.change,
            p_change: entry.p_change,
            timestamp: timestamp.clone(),
        })
        .collect();

    debug!("{} sectoral indices kept", indices.len());
    Ok(indices)
}

/// `NIFTY` plus at least one of the [`SECTORS`] keywords, anywhere in the name.
pub fn is_sectoral(name: &str) -> bool {
    name.contains("NIFTY") && SECTORS.iter().any(|sector| name.contains(sector))
}

// only an absent key becomes 0; `null`, strings etc. are copied through
fn zero() -> Value {
    Value::from(0)
}

// `YYYY-MM-DDTHH:MM:SS[.ffffff]`; the fraction is dropped when it is exactly zero
fn iso_timestamp(time: &NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

// de
// ----------------------------------------------------------------------------
//
//  {
//      "data": [
//          {
//              "key": "SECTORAL INDICES",
//              "index": "NIFTY BANK",
//              "indexSymbol": "NIFTY BANK",
//              "last": 45000,
//              "variation": 120.5,
//              ...
//          },
//          ...
//      ],
//      "timestamp": "...",
//      ...
//  }
#[derive(Debug, Deserialize)]
struct AllIndices {
    #[serde(default)]
    data: Vec<RawIndex>,
}

#[derive(Debug, Deserialize)]
struct RawIndex {
    #[serde(default)]
    index: String,
    #[serde(default = "zero")]
    last: Value,
    #[serde(default = "zero")]
    change: Value,
    #[serde(default = "zero", rename = "pChange")]
    p_change: Value,
}

// output
// ----------------------------------------------------------------------------

/// A single sectoral index, as saved to `nse_sectoral_data.json`.
///
/// Values are copied as the NSE sent them (`45000` stays an integer, a `"-"` placeholder stays
/// a string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectoralIndex {
    pub index: String,
    pub last: Value,
    pub change: Value,
    #[serde(rename = "pChange")]
    pub p_change: Value,
    pub timestamp: String,
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
