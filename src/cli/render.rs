//! Plain-text rendering of a [`PageView`].

use std::fmt::Write as _;

use crate::provider::Provider;
use crate::session::{
    LinkView,
    MessageView,
    PageView,
    TextView,
};

const SEPARATOR: &str = "----------------------------------------";

/// Renders the page. Images are fetched through `provider`.
#[must_use]
pub fn render_page(page: &PageView, none_label: &str, provider: &dyn Provider) -> String {
    let mut out = String::new();

    if let Some(error) = &page.overlay_error {
        let _ = writeln!(out, "!! {error}");
        let _ = writeln!(out, "!! type 'ok' to dismiss");
        let _ = writeln!(out, "{SEPARATOR}");
    }

    out.push_str("Translation:");
    let selected = page.selected_lang.as_deref();
    push_option(&mut out, none_label, selected.is_none());
    for lang in &page.language_options {
        push_option(&mut out, lang, selected == Some(lang.as_str()));
    }
    out.push('\n');

    if page.adding_lang {
        let _ = writeln!(out, "New language: {}_  (lang <code> | cancel-lang)", page.new_lang_input);
    }

    for message in &page.messages {
        let _ = writeln!(out, "{SEPARATOR}");
        render_message(&mut out, message, provider);
    }

    if let Some(target) = page.last_goto {
        let _ = writeln!(out, "{SEPARATOR}");
        let _ = writeln!(out, "goto_message_id = {target}");
    }

    out
}

fn push_option(out: &mut String, label: &str, selected: bool) {
    if selected {
        let _ = write!(out, " [{label}]");
    } else {
        let _ = write!(out, " {label}");
    }
}

fn render_message(out: &mut String, message: &MessageView, provider: &dyn Provider) {
    let _ = writeln!(out, "#{}", message.id);

    for link in &message.links {
        render_link(out, link);
    }

    if let Some(image_id) = message.image_id {
        let bytes = provider.get_image(image_id);
        let _ = writeln!(out, "  [image {image_id}, {} bytes]", bytes.len());
    }

    match &message.body {
        None => {}
        Some(TextView::Native(native)) => push_indented(out, "  ", native),
        Some(TextView::Translated { native, translation }) => {
            push_indented(out, "  < ", native);
            push_indented(out, "  > ", translation);
        }
        Some(TextView::Editor { native, lang, draft, placeholder }) => {
            push_indented(out, "  < ", native);
            if draft.is_empty() {
                let _ = writeln!(out, "  > ({placeholder})");
            } else {
                push_indented(out, "  > ", draft);
            }
            let _ = writeln!(out, "    save {} {lang}", message.id);
        }
    }
}

fn render_link(out: &mut String, link: &LinkView) {
    let _ = writeln!(out, "  -> {} (goto {})", link.title, link.target);
    if link.translations.is_empty() {
        return;
    }

    let parts: Vec<String> = link
        .translations
        .iter()
        .map(|t| {
            if t.emphasized {
                format!("*{}: {}*", t.lang, t.text)
            } else {
                format!("{}: {}", t.lang, t.text)
            }
        })
        .collect();
    let _ = writeln!(out, "     {}", parts.join(" · "));
}

/// Writes every line of `text` behind `prefix`.
fn push_indented(out: &mut String, prefix: &str, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "{prefix}{line}");
    }
}
