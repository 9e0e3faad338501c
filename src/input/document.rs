//! Loading message documents from text and files.

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

use super::schema::{
    SchemaError,
    parse_messages,
};
use crate::ir::{
    Message,
    MessageId,
};

/// Errors produced while loading a message document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read messages document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid messages document: {0}")]
    Schema(#[from] SchemaError),
}

/// Parses JSON text into the message list.
///
/// # Errors
/// - JSON syntax error
/// - schema violation
pub fn parse_messages_str(text: &str) -> Result<Vec<Message>, DocumentError> {
    let payload: serde_json::Value = serde_json::from_str(text)?;
    let messages = parse_messages(&payload)?;

    let duplicates = duplicate_message_ids(&messages);
    if !duplicates.is_empty() {
        tracing::warn!(
            ?duplicates,
            "Duplicate message ids; translations are saved to the first occurrence"
        );
    }

    Ok(messages)
}

/// Reads and parses a message document from disk.
///
/// # Errors
/// - file read error
/// - see [`parse_messages_str`]
pub fn load_messages_file(path: &Path) -> Result<Vec<Message>, DocumentError> {
    tracing::debug!("Loading messages from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let messages = parse_messages_str(&content)?;

    tracing::info!(count = messages.len(), path = %path.display(), "Loaded messages document");
    Ok(messages)
}

/// Returns ids used by more than one message, sorted.
#[must_use]
pub fn duplicate_message_ids(messages: &[Message]) -> Vec<MessageId> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for message in messages {
        if !seen.insert(message.id) {
            duplicates.insert(message.id);
        }
    }
    duplicates.into_iter().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn parse_valid_text() {
        let messages = parse_messages_str(r#"[{"id": 1, "text": "Hi"}]"#).unwrap();

        assert_that!(messages, len(eq(1)));
        assert_that!(messages[0].text, some(eq("Hi")));
    }

    #[rstest]
    fn parse_invalid_json_syntax() {
        let result = parse_messages_str("[{\"id\": 1,");

        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[rstest]
    fn parse_schema_violation_keeps_path() {
        let result = parse_messages_str(r#"[{"id": 1, "text": ""}]"#);

        let Err(DocumentError::Schema(error)) = result else {
            panic!("expected schema error, got {result:?}");
        };
        assert_that!(error.path, eq("messages[0].text"));
    }

    #[rstest]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("messages.json");
        fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#).unwrap();

        let messages = load_messages_file(&path).unwrap();

        assert_that!(messages, len(eq(2)));
    }

    #[rstest]
    fn load_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_messages_file(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(DocumentError::Io(_))));
    }

    #[rstest]
    fn duplicate_ids_are_reported_once() {
        let messages =
            parse_messages_str(r#"[{"id": 2}, {"id": 1}, {"id": 2}, {"id": 2}, {"id": 1}, {"id": 3}]"#)
                .unwrap();

        assert_that!(duplicate_message_ids(&messages), elements_are![eq(&1), eq(&2)]);
    }

    #[rstest]
    fn no_duplicates() {
        let messages = parse_messages_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();

        assert_that!(duplicate_message_ids(&messages), is_empty());
    }
}
