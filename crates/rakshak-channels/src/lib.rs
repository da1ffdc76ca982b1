//! # rakshak-channels
//!
//! Messaging transports. Every transport implements `rakshak_core::traits::Channel`.

pub mod console;
pub mod telegram;

pub use console::ConsoleChannel;
pub use telegram::TelegramChannel;
