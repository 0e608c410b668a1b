use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Condition, Conditions, Coordinates, LocationWeather, Temperatures, Wind};

use super::{LocationSearch, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather city lookup (`/data/2.5/find`), metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_matches(&self, query: &str) -> Result<Vec<LocationWeather>, SearchError> {
        let url = format!("{}/data/2.5/find", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "OpenWeather find request failed");
            return Err(SearchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwFindResponse = serde_json::from_str(&body)?;

        parsed
            .list
            .into_iter()
            .map(LocationWeather::try_from)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwLocation {
    id: u64,
    name: String,
    coord: OwCoord,
    main: OwMain,
    wind: OwWind,
    weather: Vec<OwWeather>,
    clouds: OwClouds,
    sys: OwSys,
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwFindResponse {
    list: Vec<OwLocation>,
}

impl TryFrom<OwLocation> for LocationWeather {
    type Error = SearchError;

    fn try_from(loc: OwLocation) -> Result<Self, Self::Error> {
        let conditions = loc
            .weather
            .into_iter()
            .map(|w| Condition {
                code: w.id,
                category: w.main,
                description: w.description,
                icon: w.icon,
            })
            .collect::<Vec<_>>();

        let conditions = Conditions::try_from(conditions)
            .map_err(|e| SearchError::Malformed(format!("location {}: {e}", loc.id)))?;

        Ok(LocationWeather {
            id: loc.id,
            name: loc.name,
            country: loc.sys.country,
            coord: Coordinates {
                lat: loc.coord.lat,
                lon: loc.coord.lon,
            },
            temperature: Temperatures {
                current_c: loc.main.temp,
                feels_like_c: loc.main.feels_like,
                min_c: loc.main.temp_min,
                max_c: loc.main.temp_max,
            },
            pressure_hpa: loc.main.pressure,
            humidity_pct: loc.main.humidity,
            wind: Wind {
                speed_mps: loc.wind.speed,
                direction_deg: loc.wind.deg,
            },
            conditions,
            cloud_cover_pct: loc.clouds.all,
            observed_at: loc.dt.and_then(unix_to_utc),
        })
    }
}

#[async_trait]
impl LocationSearch for OpenWeatherClient {
    async fn find(&self, query: &str) -> Result<Vec<LocationWeather>, SearchError> {
        self.fetch_matches(query).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
