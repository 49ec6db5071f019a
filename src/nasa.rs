//! NASA "Astronomy Picture of the Day" client and caption helpers.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

/// Telegram's hard limit for photo captions.
const CAPTION_LIMIT: usize = 1024;

/// Raw APOD payload. Title and explanation are occasionally absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// One astronomy picture, normalized for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Apod {
    pub title: String,
    pub explanation: String,
    pub url: String,
    pub is_video: bool,
}

impl Apod {
    /// Normalize the raw payload: absent text fields fall back to fixed
    /// placeholders, a missing media URL is an error.
    pub fn from_response(response: ApodResponse) -> Result<Self> {
        let url = response.url.context("APOD payload carries no media url")?;
        Ok(Self {
            title: response.title.unwrap_or_else(|| "Untitled".to_string()),
            explanation: response
                .explanation
                .unwrap_or_else(|| "No description available.".to_string()),
            is_video: response.media_type.as_deref() == Some("video"),
            url,
        })
    }
}

/// Pick a date uniformly within the trailing year.
pub fn random_apod_date(today: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    today - Duration::days(rng.gen_range(0..=365))
}

/// Photo caption clamped to Telegram's limit, reserving room for the
/// title line. Counts characters, not bytes: translated text is rarely
/// ASCII and must not be cut mid-character.
pub fn photo_caption(title: &str, explanation: &str) -> String {
    let budget = CAPTION_LIMIT.saturating_sub(title.chars().count() + 10);
    if explanation.chars().count() > budget {
        let clipped: String = explanation.chars().take(budget).collect();
        format!("📷 {title}\n\n{clipped}...")
    } else {
        format!("📷 {title}\n\n{explanation}")
    }
}

/// Text fallback for video entries, which cannot be sent as photos.
pub fn video_message(title: &str, explanation: &str, url: &str) -> String {
    format!("🎥 {title}\n\n{explanation}\n\n📺 Video: {url}")
}

/// Client for the APOD endpoint.
#[derive(Debug, Clone)]
pub struct ApodClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the picture for one specific day.
    pub async fn fetch(&self, date: NaiveDate) -> Result<Apod> {
        let date = date.format("%Y-%m-%d").to_string();
        debug!(date = %date, "fetching APOD entry");

        let response: ApodResponse = self
            .http
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("date", date.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Apod::from_response(response)
    }
}
