//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, warn};

use crate::deck_api::DeckOfCardsClient;
use crate::error::GameError;
use crate::game::GameFlow;
use crate::texts;

use super::ui_builder::edit_render;

/// Handle the hit/stand button presses.
///
/// The prompt message is edited in place; terminal replies lose the
/// keyboard. A failed action leaves the stored session untouched, so the
/// player can simply press the button again.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    flow: Arc<GameFlow<DeckOfCardsClient>>,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "received callback query");

    let player = q.from.id.0;
    let action = match q.data.as_deref() {
        Some("hit") => Some(flow.hit(player).await),
        Some("stand") => Some(flow.stand(player).await),
        // Stray callback data from an old keyboard - nothing to do.
        _ => None,
    };

    // Text attached to the final answer shows up as a client-side toast.
    let mut toast = None;
    match action {
        Some(Ok(render)) => {
            if let Some(msg) = &q.message {
                edit_render(&bot, msg.chat().id, msg.id(), render).await?;
            }
        }
        Some(Err(GameError::SessionNotFound)) => {
            toast = Some(texts::NO_ACTIVE_GAME);
        }
        Some(Err(e @ GameError::InvalidTransition(_))) => {
            // Finished sessions are removed immediately, so this only
            // appears on stray presses against a stale keyboard.
            warn!(user_id = %q.from.id, error = %e, "rejected out-of-phase action");
            toast = Some(texts::NO_ACTIVE_GAME);
        }
        Some(Err(e @ GameError::CardSource(_))) => {
            error!(user_id = %q.from.id, error = %e, "card source failed during action");
            if let Some(msg) = &q.message {
                bot.send_message(msg.chat().id, texts::CARD_TABLE_UNAVAILABLE)
                    .await?;
            }
        }
        None => {}
    }

    // Answer the callback query to remove the loading state
    let mut answer = bot.answer_callback_query(q.id);
    if let Some(text) = toast {
        answer = answer.text(text);
    }
    answer.await?;

    Ok(())
}
