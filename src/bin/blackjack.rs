//! Blackjack bot entry point: one game per player against the
//! deck-of-cards API, hit/stand via inline buttons.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use minibots::bot;
use minibots::config::BlackjackConfig;
use minibots::deck_api::DeckOfCardsClient;
use minibots::game::GameFlow;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = BlackjackConfig::from_env()?;
    info!("Starting Blackjack Telegram Bot");

    let flow = Arc::new(GameFlow::new(DeckOfCardsClient::new(config.deck_api_url)));
    let bot = Bot::new(config.bot_token);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let flow = Arc::clone(&flow);
            move |bot: Bot, msg: Message| {
                let flow = Arc::clone(&flow);
                async move { bot::message_handler(bot, msg, flow).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let flow = Arc::clone(&flow);
            move |bot: Bot, q: CallbackQuery| {
                let flow = Arc::clone(&flow);
                async move { bot::callback_handler(bot, q, flow).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
