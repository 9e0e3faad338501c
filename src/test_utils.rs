//! Shared test fixtures.
#![cfg(test)]

use serde_json::json;

use crate::input::parse_messages;
use crate::ir::{
    ImageId,
    Message,
    MessageId,
};
use crate::provider::{
    PLACEHOLDER_PNG,
    Provider,
};

/// Sample document used across test modules.
///
/// - `1`: image, native text, `en` translation
/// - `2`: native text, two links (`en`/`es` and `en`/`el`), `en` translation
/// - `3`: native text, no translations
/// - `4`: image only
#[allow(clippy::unwrap_used)]
pub(crate) fn sample_messages() -> Vec<Message> {
    parse_messages(&json!([
        {
            "id": 1,
            "image_id": 7,
            "text": "Привет. Это текст.",
            "links": [],
            "translate": {"en": "Hi. This is text."}
        },
        {
            "id": 2,
            "image_id": null,
            "text": "Переходы:",
            "links": [
                {"id": 1001, "title": "Ветвь Альфа", "translate": {"en": "Branch Alpha", "es": "Rama Alfa"}},
                {"id": 1002, "title": "Ветвь Бета", "translate": {"en": "Branch Beta", "el": "Κλάδος Βήτα"}}
            ],
            "translate": {"en": "Links:"}
        },
        {"id": 3, "text": "Третье сообщение без переводов."},
        {"id": 4, "image_id": 9}
    ]))
    .unwrap()
}

/// Provider recording every call and answering `add_translation` with a fixed result.
#[derive(Debug, Default)]
pub(crate) struct RecordingProvider {
    /// `None` accepts every translation
    pub reply: Option<String>,
    pub calls: Vec<(MessageId, String, String)>,
    pub visited: Vec<MessageId>,
}

impl RecordingProvider {
    pub(crate) fn accepting() -> Self {
        Self::default()
    }

    pub(crate) fn rejecting(error: &str) -> Self {
        Self { reply: Some(error.to_string()), ..Self::default() }
    }
}

impl Provider for RecordingProvider {
    fn get_image(&self, _image_id: ImageId) -> Vec<u8> {
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
        self.calls.push((message_id, lang.to_string(), translation.to_string()));
        self.reply.clone()
    }
}
