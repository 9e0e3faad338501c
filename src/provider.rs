//! Provider contract: images, navigation and translation persistence.

use std::collections::{
    HashMap,
    HashSet,
};

use crate::ir::{
    ImageId,
    Message,
    MessageId,
};

/// External collaborator consumed by the session state machine.
///
/// Calls are synchronous. A provider backed by networked storage should bound
/// its own calls with a timeout.
pub trait Provider {
    /// Returns encoded image bytes. Must not fail; return a placeholder instead.
    fn get_image(&self, image_id: ImageId) -> Vec<u8>;

    /// Navigation hint towards `message_id`.
    fn go_to(&mut self, message_id: MessageId);

    /// Persists a translation.
    ///
    /// `lang` and `translation` are trimmed and non-empty.
    /// Returns `None` on success, otherwise a user-facing error message.
    fn add_translation(
        &mut self,
        message_id: MessageId,
        lang: &str,
        translation: &str,
    ) -> Option<String>;
}

/// Valid 1x1 PNG returned for every image id.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x04, 0x00, 0x00, 0x00, 0xb5, 0x1c, 0x0c,
    0x02, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0xfc, 0xff, 0x1f, 0x00,
    0x03, 0x03, 0x01, 0xff, 0xa5, 0xdf, 0xd6, 0x7f, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44,
    0xae, 0x42, 0x60, 0x82,
];

/// Default upper bound on translation length, in characters.
pub const DEFAULT_MAX_TRANSLATION_LENGTH: usize = 5000;

/// Demo provider keeping everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    /// Ids accepted by `add_translation`
    known_ids: HashSet<MessageId>,
    /// Saved translations keyed by (message id, language)
    translations: HashMap<(MessageId, String), String>,
    /// Navigation targets, oldest first
    visited: Vec<MessageId>,
    max_translation_length: usize,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new(messages: &[Message], max_translation_length: usize) -> Self {
        Self {
            known_ids: messages.iter().map(|m| m.id).collect(),
            translations: HashMap::new(),
            visited: Vec::new(),
            max_translation_length,
        }
    }

    /// Replaces the set of known message ids after a document reload.
    pub fn reset_messages(&mut self, messages: &[Message]) {
        self.known_ids = messages.iter().map(|m| m.id).collect();
    }

    /// Returns a translation stored through this provider.
    #[must_use]
    pub fn stored_translation(&self, message_id: MessageId, lang: &str) -> Option<&str> {
        self.translations.get(&(message_id, lang.to_string())).map(String::as_str)
    }

    /// Most recent navigation target.
    #[must_use]
    pub fn last_visited(&self) -> Option<MessageId> {
        self.visited.last().copied()
    }

    #[must_use]
    pub fn visited(&self) -> &[MessageId] {
        &self.visited
    }
}

impl Provider for InMemoryProvider {
    fn get_image(&self, image_id: ImageId) -> Vec<u8> {
        tracing::debug!(image_id, "Serving placeholder image");
        PLACEHOLDER_PNG.to_vec()
    }

    fn go_to(&mut self, message_id: MessageId) {
        self.visited.push(message_id);
    }

    fn add_translation(
        &mut self,
        message_id: MessageId,
        lang: &str,
        translation: &str,
    ) -> Option<String> {
        if translation.chars().count() > self.max_translation_length {
            return Some("Translation is too long.".to_string());
        }
        if !self.known_ids.contains(&message_id) {
            return Some(format!("Message {message_id} not found."));
        }

        self.translations.insert((message_id, lang.to_string()), translation.to_string());
        None
    }
}
