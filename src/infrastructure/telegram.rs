//! # Telegram Service Adapter
//!
//! Thin bridge between the bot's core logic and teloxide. The core deals in
//! `Reply` values; this module renders them and applies the markup hint and
//! keyboard so Telegram types never leak inward.

use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ParseMode};

use crate::domain::types::{Markup, Reply};
use crate::interface::render;
use crate::strings::messages::captions;

/// The persistent main menu: one button per feature.
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(captions::MY_TASKS),
            KeyboardButton::new(captions::CURRENCY),
        ],
        vec![
            KeyboardButton::new(captions::WEATHER),
            KeyboardButton::new(captions::RANDOM),
        ],
    ])
    .resize_keyboard(true)
}

/// Render a reply and send it. The welcome message also (re)attaches the
/// menu keyboard.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> ResponseResult<()> {
    let (text, markup) = render::render(reply);

    let mut request = bot.send_message(chat_id, text);
    if markup == Markup::Markdown {
        request = request.parse_mode(ParseMode::Markdown);
    }
    if matches!(reply, Reply::Welcome) {
        request = request.reply_markup(main_keyboard());
    }
    request.await?;

    Ok(())
}
