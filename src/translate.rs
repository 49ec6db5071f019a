//! Ad-hoc machine translation via the unofficial Google Translate
//! endpoint. Best effort only: a failed translation falls back to the
//! original text, never to an error.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

/// Pull the translated text out of the endpoint's nested-array payload.
/// The first element is a list of segments; each segment carries the
/// translated chunk at index 0.
pub fn extract_translation(value: &Value) -> Option<String> {
    let segments = value.get(0)?.as_array()?;

    let mut out = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
            out.push_str(chunk);
        }
    }

    (!out.is_empty()).then_some(out)
}

#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: reqwest::Client,
    base_url: String,
    target_lang: String,
}

impl TranslateClient {
    pub fn new(base_url: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Translate English text into the configured target language,
    /// returning the input unchanged when the endpoint misbehaves.
    pub async fn translate(&self, text: &str) -> String {
        match self.request(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(error = %e, "translation failed, keeping original text");
                text.to_string()
            }
        }
    }

    async fn request(&self, text: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);
        let value: Value = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_translation(&value).context("unexpected translation payload shape")
    }
}
