//! UI Builder module for creating keyboards and delivering render
//! instructions over the Telegram transport.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, MessageId};
use url::Url;

use crate::game::Render;

/// The in-game choice keyboard offered while it is the player's turn.
pub fn game_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Hit", "hit"),
        InlineKeyboardButton::callback("✋ Stand", "stand"),
    ]])
}

/// Deliver a render instruction as a fresh message.
pub async fn send_render(bot: &Bot, chat_id: ChatId, render: Render) -> Result<()> {
    match render {
        Render::Message(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Render::Prompt(text) => {
            bot.send_message(chat_id, text)
                .reply_markup(game_keyboard())
                .await?;
        }
        Render::Photo { url, caption } => {
            let url = Url::parse(&url)?;
            bot.send_photo(chat_id, InputFile::url(url))
                .caption(caption)
                .await?;
        }
    }
    Ok(())
}

/// Deliver a render instruction by editing an existing message in place.
/// Editing a text message drops its keyboard unless the prompt keeps it.
pub async fn edit_render(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    render: Render,
) -> Result<()> {
    match render {
        Render::Message(text) => {
            bot.edit_message_text(chat_id, message_id, text).await?;
        }
        Render::Prompt(text) => {
            bot.edit_message_text(chat_id, message_id, text)
                .reply_markup(game_keyboard())
                .await?;
        }
        // Photos cannot replace a text message in place.
        photo @ Render::Photo { .. } => send_render(bot, chat_id, photo).await?,
    }
    Ok(())
}
