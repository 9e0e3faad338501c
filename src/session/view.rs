//! Render-agnostic page description.
//!
//! Renderers draw a [`PageView`] and map user actions back onto
//! [`SessionState`] transitions.

use crate::ir::{
    ImageId,
    Link,
    Message,
    MessageId,
};
use crate::langs::language_options;
use crate::session::SessionState;

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Selector choices without the native view, sorted
    pub language_options: Vec<String>,
    /// `None` is the native view
    pub selected_lang: Option<String>,
    pub adding_lang: bool,
    pub new_lang_input: String,
    pub overlay_error: Option<String>,
    /// Last link target followed in this session
    pub last_goto: Option<MessageId>,
    pub messages: Vec<MessageView>,
}

/// One message, parts in display order. Absent parts are `None`/empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub links: Vec<LinkView>,
    pub image_id: Option<ImageId>,
    pub body: Option<TextView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    /// Navigation target
    pub target: MessageId,
    pub title: String,
    /// All link translations sorted by language
    pub translations: Vec<LinkTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTranslation {
    pub lang: String,
    pub text: String,
    /// Set for the selected language
    pub emphasized: bool,
}

/// Text section of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextView {
    /// Native view
    Native(String),
    /// Native text beside an existing translation
    Translated { native: String, translation: String },
    /// Native text beside a translation editor
    Editor { native: String, lang: String, draft: String, placeholder: String },
}

/// Builds the page for the current model and session state.
#[must_use]
pub fn build_page(messages: &[Message], state: &SessionState) -> PageView {
    let selected = state.selected_lang();

    PageView {
        language_options: language_options(messages, state.extra_langs()),
        selected_lang: selected.map(str::to_string),
        adding_lang: state.is_adding_lang(),
        new_lang_input: state.new_lang_input().to_string(),
        overlay_error: state.overlay_error().map(str::to_string),
        last_goto: state.last_goto(),
        messages: messages.iter().map(|m| build_message(m, state)).collect(),
    }
}

fn build_message(message: &Message, state: &SessionState) -> MessageView {
    let selected = state.selected_lang();

    MessageView {
        id: message.id,
        links: message.links.iter().map(|link| build_link(link, selected)).collect(),
        image_id: message.image_id,
        body: build_text(message, state),
    }
}

fn build_link(link: &Link, selected: Option<&str>) -> LinkView {
    LinkView {
        target: link.id,
        title: link.title.clone(),
        translations: link
            .translate
            .iter()
            .map(|(lang, text)| LinkTranslation {
                lang: lang.clone(),
                text: text.clone(),
                emphasized: selected == Some(lang.as_str()),
            })
            .collect(),
    }
}

fn build_text(message: &Message, state: &SessionState) -> Option<TextView> {
    let native = message.text.clone()?;

    let Some(lang) = state.selected_lang() else {
        return Some(TextView::Native(native));
    };

    Some(match message.translation(lang) {
        Some(translation) => TextView::Translated { native, translation: translation.to_string() },
        None => TextView::Editor {
            native,
            lang: lang.to_string(),
            draft: state.draft(message.id, lang).unwrap_or_default().to_string(),
            placeholder: format!("Enter translation ({lang})…"),
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::{
        RecordingProvider,
        sample_messages,
    };

    #[rstest]
    #[googletest::test]
    fn native_view_shows_native_text_only() {
        let messages = sample_messages();
        let state = SessionState::new();

        let page = build_page(&messages, &state);

        assert_that!(page.messages, len(eq(4)));
        expect_that!(page.selected_lang, none());
        expect_that!(
            page.messages[0].body,
            some(eq(&TextView::Native("Привет. Это текст.".to_string())))
        );
        expect_that!(page.messages[0].image_id, some(eq(7)));
        expect_that!(page.messages[3].body, none());
        expect_that!(page.messages[3].image_id, some(eq(9)));
    }

    #[rstest]
    #[googletest::test]
    fn options_are_sorted_languages() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        let _ = state.commit_add_language("ab");

        let page = build_page(&messages, &state);

        expect_that!(page.language_options, elements_are![eq("ab"), eq("el"), eq("en"), eq("es")]);
    }

    #[rstest]
    #[googletest::test]
    fn selected_language_with_translation_is_side_by_side() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        state.select_language(Some("en"), &messages);

        let page = build_page(&messages, &state);

        expect_that!(
            page.messages[1].body,
            some(eq(&TextView::Translated {
                native: "Переходы:".to_string(),
                translation: "Links:".to_string()
            }))
        );
    }

    #[rstest]
    #[googletest::test]
    fn missing_translation_shows_editor_with_draft() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        state.select_language(Some("es"), &messages);
        state.edit_draft(3, "es", "Tercer");

        let page = build_page(&messages, &state);

        expect_that!(
            page.messages[2].body,
            some(eq(&TextView::Editor {
                native: "Третье сообщение без переводов.".to_string(),
                lang: "es".to_string(),
                draft: "Tercer".to_string(),
                placeholder: "Enter translation (es)…".to_string()
            }))
        );
        let Some(TextView::Editor { draft, .. }) = &page.messages[0].body else {
            panic!("expected editor, got {:?}", page.messages[0].body);
        };
        expect_that!(draft, eq(""));
    }

    #[rstest]
    #[googletest::test]
    fn message_without_native_text_has_no_body_when_translating() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        state.select_language(Some("en"), &messages);

        let page = build_page(&messages, &state);

        expect_that!(page.messages[3].body, none());
    }

    #[rstest]
    #[googletest::test]
    fn link_translations_sorted_and_selected_emphasized() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        state.select_language(Some("es"), &messages);

        let page = build_page(&messages, &state);
        let link = &page.messages[1].links[0];

        expect_that!(link.target, eq(1001));
        expect_that!(link.title, eq("Ветвь Альфа"));
        let rendered: Vec<_> =
            link.translations.iter().map(|t| (t.lang.as_str(), t.emphasized)).collect();
        expect_that!(rendered, elements_are![eq(&("en", false)), eq(&("es", true))]);
    }

    #[rstest]
    #[googletest::test]
    fn saved_translation_replaces_editor() {
        let mut messages = sample_messages();
        let mut state = SessionState::new();
        let mut provider = RecordingProvider::accepting();
        state.select_language(Some("es"), &messages);
        state.edit_draft(3, "es", " Tercero ");
        state.save_translation(&mut messages, &mut provider, 3, "es").unwrap();

        let page = build_page(&messages, &state);

        let Some(TextView::Translated { translation, .. }) = &page.messages[2].body else {
            panic!("expected translation, got {:?}", page.messages[2].body);
        };
        expect_that!(translation, eq("Tercero"));
    }

    #[rstest]
    #[googletest::test]
    fn overlay_and_add_language_state_are_exposed() {
        let messages = sample_messages();
        let mut state = SessionState::new();
        state.begin_add_language();
        state.set_new_lang_input("f");
        let _ = state.commit_add_language(" ");

        let page = build_page(&messages, &state);

        expect_that!(page.adding_lang, eq(true));
        expect_that!(page.new_lang_input, eq("f"));
        expect_that!(page.overlay_error, some(eq("Language name is empty.")));
    }
}
