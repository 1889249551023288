//! Thin asynchronous client for a Nominatim-compatible geocoding service.
//!
//! - Searches are scoped to Canada and enriched with address details.
//! - Results are memoised per raw query string for the lifetime of the client.
//! - Failures are logged and degrade to an empty suggestion list.

use std::{collections::HashMap, sync::Arc};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::{Mutex, OnceCell};

use crate::domain::{normalize_postal_code, GeoPoint, Location};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const DEFAULT_COUNTRY_CODE: &str = "ca";
const DEFAULT_COUNTRY_QUALIFIER: &str = "Canada";
const DEFAULT_LIMIT: u8 = 8;
const USER_AGENT: &str = "ship-route-planner/1.0.0";

#[derive(Debug, Error)]
pub enum GeocoderError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub country_code: String,
    /// Appended to every query, e.g. "Toronto, Canada".
    pub country_qualifier: String,
    pub limit: u8,
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            country_qualifier: DEFAULT_COUNTRY_QUALIFIER.to_string(),
            limit: DEFAULT_LIMIT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub status: CacheStatus,
}

#[derive(Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: Url,
    config: GeocoderConfig,
    cache: Arc<Mutex<HashMap<String, Arc<OnceCell<Vec<Location>>>>>>,
}

impl GeocodingClient {
    pub fn new() -> Result<Self, GeocoderError> {
        Self::with_config(GeocoderConfig::default())
    }

    pub fn with_base_url(base: &str) -> Result<Self, GeocoderError> {
        Self::with_config(GeocoderConfig {
            base_url: base.to_string(),
            ..GeocoderConfig::default()
        })
    }

    pub fn with_config(config: GeocoderConfig) -> Result<Self, GeocoderError> {
        // `Url::join` drops the last path segment unless the base ends in '/'.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        let http = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            http,
            base_url,
            config,
            cache: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Suggestions for `query`; never fails, an error yields no suggestions.
    pub async fn search(&self, query: &str) -> Vec<Location> {
        match self.lookup(query).await {
            Ok(payload) => {
                log::debug!(
                    "geocode '{query}': {} result(s) ({:?})",
                    payload.data.len(),
                    payload.status
                );
                payload.data
            }
            Err(err) => {
                log::warn!("geocoding '{query}' failed: {err}");
                Vec::new()
            }
        }
    }

    /// Cached lookup. Concurrent callers for the same query share one request;
    /// failed requests are not cached.
    pub async fn lookup(&self, query: &str) -> Result<CachedPayload<Vec<Location>>, GeocoderError> {
        if query.trim().is_empty() {
            return Ok(CachedPayload {
                data: Vec::new(),
                status: CacheStatus::Fresh,
            });
        }

        let cell = self
            .cache
            .lock()
            .await
            .entry(query.to_string())
            .or_default()
            .clone();

        let mut fetched = false;
        let result = cell
            .get_or_try_init(|| {
                fetched = true;
                self.fetch_places(query)
            })
            .await
            .cloned();

        match result {
            Ok(data) => Ok(CachedPayload {
                data,
                status: if fetched {
                    CacheStatus::Fresh
                } else {
                    CacheStatus::Cached
                },
            }),
            Err(err) => {
                self.forget_failed(query, &cell).await;
                Err(err)
            }
        }
    }

    async fn forget_failed(&self, query: &str, cell: &Arc<OnceCell<Vec<Location>>>) {
        let mut cache = self.cache.lock().await;
        let stale = cache
            .get(query)
            .is_some_and(|entry| Arc::ptr_eq(entry, cell) && !entry.initialized());
        if stale {
            cache.remove(query);
        }
    }

    /// Drops every memoised result; returns how many queries were cached.
    pub async fn clear_cache(&self) -> usize {
        let mut cache = self.cache.lock().await;
        let dropped = cache.values().filter(|cell| cell.initialized()).count();
        cache.clear();
        log::debug!("cleared {dropped} cached geocoding result(s)");
        dropped
    }

    #[cfg(test)]
    async fn cached_queries(&self) -> usize {
        self.cache
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    async fn fetch_places(&self, query: &str) -> Result<Vec<Location>, GeocoderError> {
        let url = self.search_url(query)?;
        log::debug!("requesting {url}");

        let raw: serde_json::Value = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_places(raw)
    }

    fn search_url(&self, query: &str) -> Result<Url, GeocoderError> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", &augment_query(query, &self.config.country_qualifier))
            .append_pair("countrycodes", &self.config.country_code)
            .append_pair("limit", &self.config.limit.to_string())
            .append_pair("addressdetails", "1");
        Ok(url)
    }
}

/// Postal codes are sent in canonical `A1A 1A1` form; everything gets the
/// country qualifier.
pub fn augment_query(query: &str, country_qualifier: &str) -> String {
    let trimmed = query.trim();
    match normalize_postal_code(trimmed) {
        Some(postal) => format!("{postal}, {country_qualifier}"),
        None => format!("{trimmed}, {country_qualifier}"),
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    #[serde(deserialize_with = "string_from_json")]
    place_id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    lat: Option<serde_json::Value>,
    #[serde(default)]
    lon: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    address: Option<AddressDto>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressDto {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
}

impl AddressDto {
    fn settlement(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

impl PlaceDto {
    fn into_location(self) -> Option<Location> {
        let lat = coordinate(self.lat.as_ref())?;
        let lng = coordinate(self.lon.as_ref())?;
        let point = GeoPoint::new(lat, lng)?;

        let full_address = self.display_name.unwrap_or_default();
        let address = self.address.unwrap_or_default();
        let display_name = short_name(&address).unwrap_or_else(|| full_address.clone());

        Some(Location {
            id: self.place_id,
            point,
            display_name,
            full_address,
            postal_code: address.postcode,
        })
    }
}

/// "City, Province", else "Postcode, Province".
fn short_name(address: &AddressDto) -> Option<String> {
    let state = address.state.as_deref()?;
    if let Some(place) = address.settlement() {
        return Some(format!("{place}, {state}"));
    }
    address
        .postcode
        .as_deref()
        .map(|postcode| format!("{postcode}, {state}"))
}

fn coordinate(value: Option<&serde_json::Value>) -> Option<f64> {
    let parsed = match value? {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn parse_places(value: serde_json::Value) -> Result<Vec<Location>, GeocoderError> {
    let serde_json::Value::Array(entries) = value else {
        return Err(GeocoderError::Decode("expected a JSON array".into()));
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<PlaceDto>(entry) {
            Ok(dto) => {
                let kind = dto.kind.clone().unwrap_or_default();
                let location = dto.into_location();
                if location.is_none() {
                    log::debug!("skipping result ({kind}) without usable coordinates");
                }
                location
            }
            Err(err) => {
                log::debug!("skipping malformed result: {err}");
                None
            }
        })
        .collect())
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer place id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
