//! # Telegram Mini-Bot Suite
//!
//! Three small Telegram bots sharing one library: a blackjack game played
//! against an external deck-of-cards API, a dog-breed lookup bot, and a
//! NASA "Astronomy Picture of the Day" bot with ad-hoc translation.

pub mod bot;
pub mod cards;
pub mod config;
pub mod deck_api;
pub mod dogs;
pub mod error;
pub mod game;
pub mod nasa;
pub mod session;
pub mod texts;
pub mod translate;
