//! Schema validation for message documents.
//!
//! Turns an untrusted `serde_json::Value` into the typed model in [`crate::ir`].
//! Validation is fail-fast: the first violation (in document order) is reported
//! together with the JSON path of the offending field, e.g.
//! `messages[1].links[0].title`.

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::ir::{
    LangMap,
    Link,
    Message,
};

/// Path prefix used for the root list.
pub const ROOT_PATH: &str = "messages";

/// A structural or type violation in the input document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct SchemaError {
    /// JSON path to the field (e.g., "messages[0].translate[en]")
    pub path: String,
    pub reason: String,
}

impl SchemaError {
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }
}

/// Parses an optional `{lang: text}` object.
///
/// `null` yields an empty map. Entries are checked in document order.
///
/// # Errors
/// - `value` is neither `null` nor an object
/// - a key is empty (`"keys must be non-empty strings"`)
/// - a value is not a non-empty string (`"value must be non-empty string"`)
pub fn parse_lang_map(value: &Value, ctx: &str) -> Result<LangMap, SchemaError> {
    let map = match value {
        Value::Null => return Ok(LangMap::new()),
        Value::Object(map) => map,
        _ => return Err(SchemaError::new(ctx, "must be an object of {lang: text}")),
    };

    let mut out = LangMap::new();
    for (lang, text) in map {
        if lang.is_empty() {
            return Err(SchemaError::new(
                format!("{ctx}[{lang}]"),
                "keys must be non-empty strings",
            ));
        }
        match text.as_str() {
            Some(text) if !text.is_empty() => {
                out.insert(lang.clone(), text.to_string());
            }
            _ => {
                return Err(SchemaError::new(
                    format!("{ctx}[{lang}]"),
                    "value must be non-empty string",
                ));
            }
        }
    }
    Ok(out)
}

/// Parses an optional list of links.
///
/// `null` yields an empty list. Fields of each element are checked in the
/// order `id`, `title`, `translate`.
///
/// # Errors
/// The first violation found, with the element index in the path.
pub fn parse_links(value: &Value, ctx: &str) -> Result<Vec<Link>, SchemaError> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(SchemaError::new(ctx, "must be a list")),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_ctx = format!("{ctx}[{index}]");
            let fields = as_object(item, &item_ctx)?;

            let id = required_integer(fields, &item_ctx, "id")?;
            let title = field(fields, "title")
                .as_str()
                .filter(|title| !title.is_empty())
                .ok_or_else(|| {
                    SchemaError::new(format!("{item_ctx}.title"), "must be a non-empty string")
                })?;
            let translate =
                parse_lang_map(field(fields, "translate"), &format!("{item_ctx}.translate"))?;

            Ok(Link { id, title: title.to_string(), translate })
        })
        .collect()
}

/// Parses the root document into the ordered message list.
///
/// All-or-nothing: no partial result is produced when any element is invalid.
///
/// # Errors
/// - the payload is not a list
/// - the first invalid message (by position), see [`parse_message`]
pub fn parse_messages(payload: &Value) -> Result<Vec<Message>, SchemaError> {
    let Value::Array(items) = payload else {
        return Err(SchemaError::new(ROOT_PATH, "root must be a JSON list of messages"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_message(item, &format!("{ROOT_PATH}[{index}]")))
        .collect()
}

/// Parses a single message object located at `ctx`.
///
/// # Errors
/// - not an object
/// - `id` is not an integer
/// - `image_id` is present and not an integer
/// - `text` is present and not a non-empty string
/// - `links` / `translate` are invalid
pub fn parse_message(value: &Value, ctx: &str) -> Result<Message, SchemaError> {
    let fields = as_object(value, ctx)?;

    let id = required_integer(fields, ctx, "id")?;

    let image_id = match field(fields, "image_id") {
        Value::Null => None,
        other => Some(other.as_i64().ok_or_else(|| {
            SchemaError::new(format!("{ctx}.image_id"), "must be an integer if provided")
        })?),
    };

    let text = match field(fields, "text") {
        Value::Null => None,
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        _ => {
            return Err(SchemaError::new(
                format!("{ctx}.text"),
                "must be a non-empty string if provided",
            ));
        }
    };

    let links = parse_links(field(fields, "links"), &format!("{ctx}.links"))?;
    let translate = parse_lang_map(field(fields, "translate"), &format!("{ctx}.translate"))?;

    Ok(Message { id, image_id, text, links, translate })
}

/// Missing fields read as `null`.
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> &'a Value {
    fields.get(name).unwrap_or(&Value::Null)
}

fn as_object<'a>(value: &'a Value, ctx: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::new(ctx, "must be an object"))
}

/// Booleans and floats are rejected; integers must fit in `i64`.
fn required_integer(
    fields: &Map<String, Value>,
    ctx: &str,
    name: &str,
) -> Result<i64, SchemaError> {
    field(fields, name)
        .as_i64()
        .ok_or_else(|| SchemaError::new(format!("{ctx}.{name}"), "must be an integer"))
}
