//! message-desk
//!
//! Browse a JSON list of messages per language and enter missing translations inline.

pub mod cli;
pub mod config;
pub mod input;
pub mod ir;
pub mod langs;
pub mod provider;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use input::{
    SchemaError,
    parse_messages,
};
pub use session::SessionState;
