//! # chatterbox-core
//!
//! Core types shared by the store and the HTTP layer: [`Message`], the validated payloads
//! [`NewMessage`] and [`BodyUpdate`], [`ValidationError`], and tracing initialization.

pub mod error;
pub mod logger;
pub mod types;

pub use error::ValidationError;
pub use logger::init_tracing;
pub use types::{BodyUpdate, Message, NewMessage};
