//! Interactive session over a line-oriented reader/writer pair.

use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    AsyncWrite,
    AsyncWriteExt,
};

use super::command::{
    Command,
    CommandError,
    HELP,
};
use super::render::render_page;
use crate::config::ConfigManager;
use crate::input::load_messages_file;
use crate::ir::Message;
use crate::provider::InMemoryProvider;
use crate::session::{
    SessionState,
    build_page,
};

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Output(String),
    Quit,
}

/// One session: configuration, loaded model, session state and provider.
#[derive(Debug)]
pub struct App {
    config: ConfigManager,
    /// Empty while `load_error` is set
    messages: Vec<Message>,
    /// Blocking document error
    load_error: Option<String>,
    state: SessionState,
    provider: InMemoryProvider,
}

impl App {
    /// Creates a session and loads the configured document.
    #[must_use]
    pub fn open(config: ConfigManager) -> Self {
        let mut app = Self::with_messages(config, Vec::new());
        app.reload();
        app
    }

    /// Creates a session over an already parsed model.
    #[must_use]
    pub fn with_messages(config: ConfigManager, messages: Vec<Message>) -> Self {
        let provider =
            InMemoryProvider::new(&messages, config.get_settings().max_translation_length);
        Self { config, messages, load_error: None, state: SessionState::new(), provider }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn provider(&self) -> &InMemoryProvider {
        &self.provider
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Replaces the model with the document on disk.
    ///
    /// A document that fails to load is never shown partially.
    pub fn reload(&mut self) {
        let path = self.config.document_path();
        match load_messages_file(&path) {
            Ok(messages) => {
                self.provider.reset_messages(&messages);
                self.state.on_document_loaded(&messages);
                self.messages = messages;
                self.load_error = None;
            }
            Err(error) => {
                tracing::error!(path = %path.display(), error = %error, "Failed to load messages");
                self.messages.clear();
                self.provider.reset_messages(&self.messages);
                self.load_error = Some(error.to_string());
            }
        }
    }

    /// Renders the current page.
    pub fn render(&mut self) -> String {
        if let Some(error) = &self.load_error {
            return format!("!! {error}\n!! fix the document and type 'reload'\n");
        }

        self.state.refresh(&self.messages);
        let page = build_page(&self.messages, &self.state);
        render_page(&page, &self.config.get_settings().none_label, &self.provider)
    }

    /// Applies one command and returns what to show next.
    pub fn handle(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "Handling command");

        match command {
            Command::Show => {}
            Command::Select(lang) => self.state.select_language(lang.as_deref(), &self.messages),
            Command::AddLanguage => self.state.begin_add_language(),
            Command::SaveLanguage(_) if !self.state.is_adding_lang() => {
                return Reply::Output("Type 'add-lang' before 'lang <code>'\n".to_string());
            }
            Command::SaveLanguage(code) => {
                self.state.set_new_lang_input(&code);
                let _ = self.state.commit_add_language(&code);
            }
            Command::CancelLanguage => self.state.cancel_add_language(),
            Command::Edit { message_id, lang, text } => {
                self.state.edit_draft(message_id, &lang, &text);
            }
            Command::Save { message_id, lang } => {
                let _ = self.state.save_translation(
                    &mut self.messages,
                    &mut self.provider,
                    message_id,
                    &lang,
                );
            }
            Command::GoTo(target) => self.state.follow_link(&mut self.provider, target),
            Command::Ok => self.state.acknowledge_error(),
            Command::Reload => self.reload(),
            Command::Export => return Reply::Output(self.export()),
            Command::Help => return Reply::Output(format!("{HELP}\n")),
            Command::Quit => return Reply::Quit,
        }

        Reply::Output(self.render())
    }

    /// Current model in the input document format.
    fn export(&self) -> String {
        match serde_json::to_string_pretty(&self.messages) {
            Ok(json) => format!("{json}\n"),
            Err(error) => format!("!! Failed to export messages: {error}\n"),
        }
    }
}

/// Runs the session until `quit` or end of input.
///
/// The page is written once up front and after every command.
///
/// # Errors
/// Read or write failure on the underlying streams.
pub async fn run<R, W>(app: &mut App, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(app.render().as_bytes()).await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let output = match line.parse::<Command>() {
            Ok(command) => match app.handle(command) {
                Reply::Output(output) => output,
                Reply::Quit => break,
            },
            Err(CommandError::Empty) => continue,
            Err(error) => format!("{error}\n"),
        };

        writer.write_all(output.as_bytes()).await?;
        writer.flush().await?;
    }

    tracing::debug!("Session finished");
    Ok(())
}
