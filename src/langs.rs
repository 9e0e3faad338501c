//! Language aggregation over a parsed message list.

use std::collections::{
    BTreeSet,
    HashSet,
};

use crate::ir::Message;

/// Collects every language code used by message and link translations.
///
/// Returns distinct codes in lexicographic order. Nothing is cached; call it
/// again after the model changes.
#[must_use]
pub fn collect_available_langs(messages: &[Message]) -> Vec<String> {
    let mut langs = BTreeSet::new();
    for message in messages {
        langs.extend(message.translate.keys().cloned());
        for link in &message.links {
            langs.extend(link.translate.keys().cloned());
        }
    }
    langs.into_iter().collect()
}

/// Language choices offered by the selector, excluding the native view.
///
/// Sorted union of [`collect_available_langs`] and the user's extra languages.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn language_options(messages: &[Message], extra_langs: &HashSet<String>) -> Vec<String> {
    let mut options: BTreeSet<String> = collect_available_langs(messages).into_iter().collect();
    options.extend(extra_langs.iter().cloned());
    options.into_iter().collect()
}

/// Returns true if `lang` can be selected.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn is_known_language(lang: &str, messages: &[Message], extra_langs: &HashSet<String>) -> bool {
    extra_langs.contains(lang)
        || messages.iter().any(|m| {
            m.translate.contains_key(lang) || m.links.iter().any(|l| l.translate.contains_key(lang))
        })
}
