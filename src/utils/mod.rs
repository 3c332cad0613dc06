//! Utility functions.
//!
//! Collection of helpers for working with Telegram messages.

pub mod code;
pub mod command;
pub mod format;
pub mod keyboard;
pub mod link;
pub mod message;

pub use code::extract_code;
pub use command::{
    command_name, get_command_args, get_command_args_with_prefix, parse_command,
    parse_command_with_prefix,
};
pub use format::{format_duration, format_size};
pub use keyboard::{Button, ButtonAction, Keyboard, KeyboardError, create_inline_keyboard};
pub use link::{ChatRef, LinkError, MessageLink, build_message_link, message_link, parse_message_link};
pub use message::{
    Content, Named, Sender, content, display_name, get_chat_id, get_display_name,
    get_message_text, get_sender_id, sender,
};
