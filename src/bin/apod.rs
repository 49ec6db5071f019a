//! NASA picture-of-the-day bot entry point: /random_apod fetches a
//! random entry from the trailing year, translates it, and replies with
//! a captioned photo (or a link for video entries).

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use minibots::bot::send_render;
use minibots::config::ApodConfig;
use minibots::game::Render;
use minibots::nasa::{self, ApodClient};
use minibots::translate::TranslateClient;

const WELCOME: &str = "🚀 Hi!\nSend /random_apod to get a random NASA picture of the day!";
const APOD_UNAVAILABLE: &str = "❌ Couldn't fetch data from NASA. Please try again later.";

async fn apod_message_handler(
    bot: Bot,
    msg: Message,
    apod: Arc<ApodClient>,
    translator: Arc<TranslateClient>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match text.trim() {
        "/start" => {
            bot.send_message(msg.chat.id, WELCOME).await?;
        }
        "/random_apod" => {
            let date = nasa::random_apod_date(chrono::Utc::now().date_naive(), &mut rand::thread_rng());
            let entry = match apod.fetch(date).await {
                Ok(entry) => entry,
                Err(e) => {
                    error!(user_id = %msg.chat.id, error = %e, "failed to fetch APOD entry");
                    bot.send_message(msg.chat.id, APOD_UNAVAILABLE).await?;
                    return Ok(());
                }
            };

            let title = translator.translate(&entry.title).await;
            let explanation = translator.translate(&entry.explanation).await;

            if entry.is_video {
                bot.send_message(
                    msg.chat.id,
                    nasa::video_message(&title, &explanation, &entry.url),
                )
                .await?;
            } else {
                send_render(
                    &bot,
                    msg.chat.id,
                    Render::Photo {
                        url: entry.url,
                        caption: nasa::photo_caption(&title, &explanation),
                    },
                )
                .await?;
            }
        }
        _ => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApodConfig::from_env()?;
    info!("Starting NASA APOD Telegram Bot");

    let apod = Arc::new(ApodClient::new(config.apod_api_url, config.nasa_api_key));
    let translator = Arc::new(TranslateClient::new(
        config.translate_api_url,
        config.translate_target_lang,
    ));
    let bot = Bot::new(config.bot_token);

    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let apod = Arc::clone(&apod);
        let translator = Arc::clone(&translator);
        move |bot: Bot, msg: Message| {
            let apod = Arc::clone(&apod);
            let translator = Arc::clone(&translator);
            async move { apod_message_handler(bot, msg, apod, translator).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
