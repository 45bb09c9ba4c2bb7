//! Test helpers module
//!
//! Mock servers for the Telegram Bot API and the Gemini API, builders
//! for services wired to a scripted generator, and a Redis connection helper.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod gemini_mock;
pub mod test_data;
pub mod redis_helper;

pub use telegram_mock::*;
pub use gemini_mock::*;
pub use test_data::*;
pub use redis_helper::*;
