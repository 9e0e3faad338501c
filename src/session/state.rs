//! Per-session browsing and editing state.
//!
//! One [`SessionState`] lives for the whole session and survives every render
//! pass. Each user action maps to exactly one transition method; renderers read
//! the state back through the getters afterwards.

use std::collections::{
    HashMap,
    HashSet,
};

use thiserror::Error;

use crate::ir::{
    Message,
    MessageId,
    find_message_mut,
};
use crate::langs::is_known_language;
use crate::provider::Provider;

/// Runtime error surfaced through the overlay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Translation is empty.")]
    EmptyTranslation,

    #[error("Language name is empty.")]
    EmptyLanguageName,

    /// Message returned by the provider, passed through verbatim.
    #[error("{0}")]
    Provider(String),
}

/// Key of a draft translation.
type DraftKey = (MessageId, String);

/// Session state of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// `None` is the native view
    selected_lang: Option<String>,
    /// Languages added by hand, in memory only
    extra_langs: HashSet<String>,
    /// Whether the add-language input is shown
    adding_lang: bool,
    /// Text typed into the add-language input
    new_lang_input: String,
    /// Uncommitted translations
    drafts: HashMap<DraftKey, String>,
    /// Error waiting for acknowledgement
    overlay_error: Option<String>,
    /// Last link target followed
    last_goto: Option<MessageId>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_lang(&self) -> Option<&str> {
        self.selected_lang.as_deref()
    }

    #[must_use]
    pub const fn extra_langs(&self) -> &HashSet<String> {
        &self.extra_langs
    }

    #[must_use]
    pub const fn is_adding_lang(&self) -> bool {
        self.adding_lang
    }

    #[must_use]
    pub fn new_lang_input(&self) -> &str {
        &self.new_lang_input
    }

    /// Returns the draft for `(message_id, lang)`, if one exists.
    #[must_use]
    pub fn draft(&self, message_id: MessageId, lang: &str) -> Option<&str> {
        self.drafts.get(&(message_id, lang.trim().to_string())).map(String::as_str)
    }

    #[must_use]
    pub fn overlay_error(&self) -> Option<&str> {
        self.overlay_error.as_deref()
    }

    #[must_use]
    pub const fn last_goto(&self) -> Option<MessageId> {
        self.last_goto
    }

    /// Selects a language, or the native view with `None`.
    ///
    /// Codes unknown to both the model and the extra languages fall back to
    /// the native view.
    pub fn select_language(&mut self, lang: Option<&str>, messages: &[Message]) {
        self.selected_lang = lang.map(str::to_string);
        self.refresh(messages);
        tracing::debug!(selected = ?self.selected_lang, "Language selected");
    }

    /// Revalidates the selection against the current model.
    ///
    /// Run before every render.
    pub fn refresh(&mut self, messages: &[Message]) {
        if let Some(lang) = &self.selected_lang
            && !is_known_language(lang, messages, &self.extra_langs)
        {
            tracing::warn!(lang = %lang, "Selected language is not available, using native view");
            self.selected_lang = None;
        }
    }

    /// Adjusts the state after a new document replaced the model.
    ///
    /// Drafts of messages that no longer exist are dropped. Extra languages are kept.
    pub fn on_document_loaded(&mut self, messages: &[Message]) {
        let ids: HashSet<MessageId> = messages.iter().map(|m| m.id).collect();
        self.drafts.retain(|(message_id, _), _| ids.contains(message_id));
        self.refresh(messages);
    }

    /// Shows the add-language input.
    pub fn begin_add_language(&mut self) {
        self.adding_lang = true;
    }

    /// Echoes keystrokes of the add-language input.
    pub fn set_new_lang_input(&mut self, text: &str) {
        self.new_lang_input = text.to_string();
    }

    /// Adds `code` (trimmed) as an extra language and selects it.
    ///
    /// # Errors
    /// [`OperationError::EmptyLanguageName`] if `code` is blank. Nothing but the
    /// overlay changes in that case.
    pub fn commit_add_language(&mut self, code: &str) -> Result<(), OperationError> {
        let code = code.trim();
        if code.is_empty() {
            return self.fail(OperationError::EmptyLanguageName);
        }

        tracing::debug!(lang = %code, "Language added");
        self.extra_langs.insert(code.to_string());
        self.selected_lang = Some(code.to_string());
        self.adding_lang = false;
        self.new_lang_input.clear();
        Ok(())
    }

    /// Hides the add-language input.
    pub fn cancel_add_language(&mut self) {
        self.adding_lang = false;
    }

    /// Stores raw editor text for `(message_id, lang)`. `lang` is trimmed.
    pub fn edit_draft(&mut self, message_id: MessageId, lang: &str, text: &str) {
        self.drafts.insert((message_id, lang.trim().to_string()), text.to_string());
    }

    /// Saves the draft for `(message_id, lang)` through the provider.
    ///
    /// On success the trimmed text is written into `translate[lang]` (`lang` trimmed) of the first
    /// message with `message_id` and the draft is discarded. This is the only
    /// place the model changes after parsing.
    ///
    /// # Errors
    /// - [`OperationError::EmptyLanguageName`] if `lang` is blank
    /// - [`OperationError::EmptyTranslation`] if the draft is blank or missing
    /// - [`OperationError::Provider`] with the provider's message
    ///
    /// The draft is kept on error.
    pub fn save_translation(
        &mut self,
        messages: &mut [Message],
        provider: &mut dyn Provider,
        message_id: MessageId,
        lang: &str,
    ) -> Result<(), OperationError> {
        let lang = lang.trim();
        if lang.is_empty() {
            return self.fail(OperationError::EmptyLanguageName);
        }

        let key = (message_id, lang.to_string());
        let candidate = self.drafts.get(&key).map_or("", |draft| draft.trim()).to_string();
        if candidate.is_empty() {
            return self.fail(OperationError::EmptyTranslation);
        }

        if let Some(error) = provider.add_translation(message_id, lang, &candidate) {
            tracing::warn!(message_id, lang = %lang, error = %error, "Provider rejected translation");
            return self.fail(OperationError::Provider(error));
        }

        match find_message_mut(messages, message_id) {
            Some(message) => {
                message.translate.insert(lang.to_string(), candidate);
            }
            None => tracing::warn!(message_id, "Saved translation for a message not in the model"),
        }
        self.drafts.remove(&key);
        tracing::info!(message_id, lang = %lang, "Translation saved");
        Ok(())
    }

    /// Follows a link towards `target`.
    pub fn follow_link(&mut self, provider: &mut dyn Provider, target: MessageId) {
        tracing::debug!(message_id = target, "Following link");
        provider.go_to(target);
        self.last_goto = Some(target);
    }

    /// Dismisses the overlay error. No-op without one.
    pub fn acknowledge_error(&mut self) {
        self.overlay_error = None;
    }

    /// Records `error` in the overlay and returns it.
    fn fail(&mut self, error: OperationError) -> Result<(), OperationError> {
        tracing::debug!(error = %error, "Operation failed");
        self.overlay_error = Some(error.to_string());
        Err(error)
    }
}
