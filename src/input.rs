//! Message document input: schema validation and loading.

pub mod document;
pub mod schema;

pub use document::{
    DocumentError,
    duplicate_message_ids,
    load_messages_file,
    parse_messages_str,
};
pub use schema::{
    SchemaError,
    parse_lang_map,
    parse_links,
    parse_message,
    parse_messages,
};
