//! # Bot Configuration Module
//!
//! Per-binary configuration loaded from the environment (with `.env`
//! support in the binaries). Endpoint URLs carry production defaults and
//! can be overridden, which also lets tests point the HTTP clients at a
//! local server.

use anyhow::{Context, Result};
use std::env;

pub const DECK_API_URL: &str = "https://deckofcardsapi.com/api/deck";
pub const DOG_API_URL: &str = "https://api.thedogapi.com/v1";
pub const APOD_API_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const TRANSLATE_API_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_TRANSLATE_LANG: &str = "ru";

/// Configuration for the blackjack bot.
#[derive(Debug, Clone)]
pub struct BlackjackConfig {
    pub bot_token: String,
    pub deck_api_url: String,
}

impl BlackjackConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: require("TELEGRAM_BOT_TOKEN")?,
            deck_api_url: env_or("DECK_API_URL", DECK_API_URL),
        })
    }
}

/// Configuration for the dog-breed lookup bot.
#[derive(Debug, Clone)]
pub struct BreedsConfig {
    pub bot_token: String,
    pub dog_api_url: String,
    pub dog_api_key: String,
}

impl BreedsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: require("TELEGRAM_BOT_TOKEN")?,
            dog_api_url: env_or("DOG_API_URL", DOG_API_URL),
            dog_api_key: require("DOG_API_KEY")?,
        })
    }
}

/// Configuration for the NASA picture-of-the-day bot.
#[derive(Debug, Clone)]
pub struct ApodConfig {
    pub bot_token: String,
    pub apod_api_url: String,
    pub nasa_api_key: String,
    pub translate_api_url: String,
    pub translate_target_lang: String,
}

impl ApodConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: require("TELEGRAM_BOT_TOKEN")?,
            apod_api_url: env_or("APOD_API_URL", APOD_API_URL),
            nasa_api_key: require("NASA_API_KEY")?,
            translate_api_url: env_or("TRANSLATE_API_URL", TRANSLATE_API_URL),
            translate_target_lang: env_or("TRANSLATE_TARGET_LANG", DEFAULT_TRANSLATE_LANG),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
