//! Dog-breed lookup bot entry point: any text message is treated as a
//! breed name and answered with a photo and a short fact card.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use minibots::bot::send_render;
use minibots::config::BreedsConfig;
use minibots::dogs::{breed_caption, find_breed, DogApiClient};
use minibots::game::Render;

const WELCOME: &str = "Hi!\nI look up dogs by breed. Send me a breed name and I'll find it.";
const BREED_NOT_FOUND: &str = "That breed is not in the database. Try again.";
const IMAGE_NOT_FOUND: &str = "Couldn't find an image for that breed.";

async fn breeds_message_handler(bot: Bot, msg: Message, client: Arc<DogApiClient>) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text.trim() == "/start" {
        bot.send_message(msg.chat.id, WELCOME).await?;
        return Ok(());
    }

    let name = text.trim();
    let breeds = match client.breeds().await {
        Ok(breeds) => breeds,
        Err(e) => {
            // Same user-visible path as an unknown breed, matching the
            // lookup-over-empty-list behavior.
            error!(user_id = %msg.chat.id, error = %e, "failed to fetch breed list");
            bot.send_message(msg.chat.id, BREED_NOT_FOUND).await?;
            return Ok(());
        }
    };

    let Some(breed) = find_breed(&breeds, name) else {
        bot.send_message(msg.chat.id, BREED_NOT_FOUND).await?;
        return Ok(());
    };

    match client.breed_image(breed.id).await {
        Ok(Some(image_url)) => {
            send_render(
                &bot,
                msg.chat.id,
                Render::Photo {
                    url: image_url,
                    caption: breed_caption(breed),
                },
            )
            .await?;
        }
        Ok(None) => {
            bot.send_message(msg.chat.id, IMAGE_NOT_FOUND).await?;
        }
        Err(e) => {
            error!(user_id = %msg.chat.id, error = %e, "failed to fetch breed image");
            bot.send_message(msg.chat.id, IMAGE_NOT_FOUND).await?;
        }
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

    let config = BreedsConfig::from_env()?;
    info!("Starting Dog Breeds Telegram Bot");

    let client = Arc::new(DogApiClient::new(config.dog_api_url, config.dog_api_key));
    let bot = Bot::new(config.bot_token);

    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let client = Arc::clone(&client);
        move |bot: Bot, msg: Message| {
            let client = Arc::clone(&client);
            async move { breeds_message_handler(bot, msg, client).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
