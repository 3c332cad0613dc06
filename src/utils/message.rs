//! Message, user and chat accessors.
//!
//! Normalizes the optional sender/content fields of a message into
//! explicit variants so callers match once instead of probing fields.

use teloxide::types::{Chat, ChatId, Message, User};

/// Fallback display name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Who sent a message.
#[derive(Debug, Clone, Copy)]
pub enum Sender<'a> {
    /// Regular user account
    User(&'a User),
    /// Anonymous group admin or channel posting on behalf of a chat
    Chat(&'a Chat),
}

impl Sender<'_> {
    /// Raw id of the sender, user or chat.
    ///
    /// `None` for a user id that does not fit a signed chat id.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::User(user) => i64::try_from(user.id.0).ok(),
            Self::Chat(chat) => Some(chat.id.0),
        }
    }
}

/// Textual content of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Text(&'a str),
    Caption(&'a str),
    None,
}

impl<'a> Content<'a> {
    /// Text or caption, empty when there is neither.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Text(s) | Self::Caption(s) => s,
            Self::None => "",
        }
    }
}

/// Something with a display name: a user or a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Named<'a> {
    User {
        first_name: &'a str,
        last_name: Option<&'a str>,
    },
    Chat {
        title: Option<&'a str>,
    },
}

impl<'a> From<&'a User> for Named<'a> {
    fn from(user: &'a User) -> Self {
        Self::User {
            first_name: &user.first_name,
            last_name: user.last_name.as_deref(),
        }
    }
}

impl<'a> From<&'a Chat> for Named<'a> {
    fn from(chat: &'a Chat) -> Self {
        // Private chats are named after the user, not a title
        if chat.is_private() {
            Self::User {
                first_name: chat.first_name().unwrap_or(""),
                last_name: chat.last_name(),
            }
        } else {
            Self::Chat { title: chat.title() }
        }
    }
}

impl<'a> From<Sender<'a>> for Named<'a> {
    fn from(sender: Sender<'a>) -> Self {
        match sender {
            Sender::User(user) => user.into(),
            Sender::Chat(chat) => chat.into(),
        }
    }
}

/// Resolve the sender of a message.
pub fn sender(msg: &Message) -> Option<Sender<'_>> {
    if let Some(user) = &msg.from {
        return Some(Sender::User(user));
    }
    msg.sender_chat.as_ref().map(Sender::Chat)
}

/// Resolve the textual content of a message.
pub fn content(msg: &Message) -> Content<'_> {
    if let Some(text) = msg.text() {
        Content::Text(text)
    } else if let Some(caption) = msg.caption() {
        Content::Caption(caption)
    } else {
        Content::None
    }
}

/// Get sender ID (user, or sender chat for channel/anonymous messages).
pub fn get_sender_id(msg: &Message) -> Option<i64> {
    sender(msg).and_then(|s| s.id())
}

/// Get the ID of the chat the message was sent in.
pub fn get_chat_id(msg: &Message) -> ChatId {
    msg.chat.id
}

/// Get message text, falling back to the caption, then to "".
pub fn get_message_text(msg: &Message) -> &str {
    content(msg).as_str()
}

/// Display name for a user or chat.
///
/// Users get "first last" (trimmed), chats their title as-is.
/// Blank user names and missing or empty titles become "Unknown".
pub fn display_name(named: Option<Named<'_>>) -> String {
    let name = match named {
        Some(Named::User {
            first_name,
            last_name,
        }) => {
            let full = match last_name.filter(|l| !l.is_empty()) {
                Some(last) => format!("{} {}", first_name, last),
                None => first_name.to_string(),
            };
            full.trim().to_string()
        }
        Some(Named::Chat { title }) => title.unwrap_or_default().to_string(),
        None => String::new(),
    };

    if name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name
    }
}

/// Async form of [`display_name`] for use inside handler chains.
pub async fn get_display_name(named: Option<Named<'_>>) -> String {
    display_name(named)
}
