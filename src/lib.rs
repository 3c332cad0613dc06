//! tgutil - Telegram helper toolkit
//!
//! Small helpers on top of teloxide types.
//!
//! ## Modules
//!
//! - `config` - Environment configuration
//! - `utils` - Command parsing, message links, formatting, accessors and keyboards

pub mod config;
pub mod utils;

pub use config::Config;
