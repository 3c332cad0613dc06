//! Inline keyboard builders.
//!
//! [`Button`] and [`Keyboard`] are plain serializable values that convert
//! into teloxide's `InlineKeyboardButton` / `InlineKeyboardMarkup`.

use serde::{Deserialize, Serialize};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// What pressing a button does.
///
/// Serialized with Bot API field names, so a button reads as
/// `{"text": "...", "callback_data": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    #[serde(rename = "callback_data")]
    Callback(String),
    #[serde(rename = "url")]
    Url(String),
    #[serde(rename = "switch_inline_query")]
    SwitchInline(String),
}

/// Inline keyboard button: a label and exactly one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyboardError {
    #[error("button '{text}' has invalid URL '{url}'")]
    InvalidUrl { text: String, url: String },
}

impl Button {
    /// Create callback button.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    /// Create URL button.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// Create switch inline query button.
    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::SwitchInline(query.into()),
        }
    }

    /// Switch inline button without a preset query.
    pub fn switch_inline_empty(text: impl Into<String>) -> Self {
        Self::switch_inline(text, "")
    }

    /// Convert to a teloxide button. Fails only on unparseable URLs.
    pub fn to_teloxide(&self) -> Result<InlineKeyboardButton, KeyboardError> {
        let text = self.text.clone();
        Ok(match &self.action {
            ButtonAction::Callback(data) => InlineKeyboardButton::callback(text, data.clone()),
            ButtonAction::Url(url) => {
                let parsed = url.parse::<Url>().map_err(|_| KeyboardError::InvalidUrl {
                    text: self.text.clone(),
                    url: url.clone(),
                })?;
                InlineKeyboardButton::url(text, parsed)
            }
            ButtonAction::SwitchInline(query) => {
                InlineKeyboardButton::switch_inline_query(text, query.clone())
            }
        })
    }
}

/// Rows of buttons, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn row(mut self, row: Vec<Button>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Build the teloxide markup, failing on the first invalid button.
    pub fn to_markup(&self) -> Result<InlineKeyboardMarkup, KeyboardError> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(Button::to_teloxide).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InlineKeyboardMarkup::new(rows))
    }

    /// Build the teloxide markup, skipping invalid buttons and empty rows.
    pub fn to_markup_lossy(&self) -> InlineKeyboardMarkup {
        let rows: Vec<Vec<InlineKeyboardButton>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|btn| match btn.to_teloxide() {
                        Ok(btn) => Some(btn),
                        Err(e) => {
                            warn!("Skipping button: {}", e);
                            None
                        }
                    })
                    .collect()
            })
            .filter(|row: &Vec<InlineKeyboardButton>| !row.is_empty())
            .collect();

        InlineKeyboardMarkup::new(rows)
    }
}

impl From<Vec<Vec<Button>>> for Keyboard {
    fn from(rows: Vec<Vec<Button>>) -> Self {
        Self::new(rows)
    }
}

/// Create inline keyboard markup from rows of teloxide buttons.
pub fn create_inline_keyboard(rows: Vec<Vec<InlineKeyboardButton>>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows)
}
