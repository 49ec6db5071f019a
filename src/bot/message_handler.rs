//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::deck_api::DeckOfCardsClient;
use crate::game::GameFlow;
use crate::texts;

use super::ui_builder::send_render;

/// Handle the blackjack bot's text commands.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    flow: Arc<GameFlow<DeckOfCardsClient>>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Channel posts and other userless updates carry nothing to key a game on.
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    match text.trim() {
        "/start" => {
            debug!(user_id = %user.id, "sending welcome message");
            bot.send_message(msg.chat.id, texts::WELCOME).await?;
        }
        "/play" => match flow.start(user.id.0).await {
            Ok(render) => {
                send_render(&bot, msg.chat.id, render).await?;
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "failed to start a game");
                bot.send_message(msg.chat.id, texts::CARD_TABLE_UNAVAILABLE)
                    .await?;
            }
        },
        _ => {
            debug!(user_id = %user.id, "received unrecognized text");
            bot.send_message(msg.chat.id, texts::PLAY_HINT).await?;
        }
    }

    Ok(())
}
