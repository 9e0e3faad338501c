//! Message document data model

use std::collections::BTreeMap;

use serde::Serialize;

/// Identifier of a message. Links point at messages through it.
pub type MessageId = i64;

/// Identifier of an image served by the provider.
pub type ImageId = i64;

/// Language code → translated text.
///
/// Keys and values are never empty once produced by the parser.
/// A `BTreeMap` keeps iteration (and export) order stable.
pub type LangMap = BTreeMap<String, String>;

/// A navigation link attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target message id. Not checked against the loaded document.
    pub id: MessageId,

    /// Native title
    pub title: String,

    /// Language → translated title. Read-only after parsing.
    pub translate: LangMap,
}

/// One entry of the message document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: MessageId,

    pub image_id: Option<ImageId>,

    /// Native text
    pub text: Option<String>,

    pub links: Vec<Link>,

    /// Language → translated text.
    ///
    /// The only part of the model that changes after parsing; see
    /// [`SessionState::save_translation`](crate::session::SessionState::save_translation).
    pub translate: LangMap,
}

impl Message {
    /// Returns the translation for `lang`, if any.
    #[must_use]
    pub fn translation(&self, lang: &str) -> Option<&str> {
        self.translate.get(lang).map(String::as_str)
    }
}

/// Finds the first message with the given id.
#[must_use]
pub fn find_message(messages: &[Message], id: MessageId) -> Option<&Message> {
    messages.iter().find(|m| m.id == id)
}

/// Mutable variant of [`find_message`].
pub fn find_message_mut(messages: &mut [Message], id: MessageId) -> Option<&mut Message> {
    messages.iter_mut().find(|m| m.id == id)
}
