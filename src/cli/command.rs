//! Line commands understood by the interactive driver.

use std::str::FromStr;

use thiserror::Error;

use crate::ir::MessageId;

/// One user action, typed as a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the page again
    Show,
    /// Select a language, `None` for the native view
    Select(Option<String>),
    /// Open the add-language input
    AddLanguage,
    /// Type a code into the add-language input and save it
    SaveLanguage(String),
    /// Close the add-language input
    CancelLanguage,
    /// Replace the draft of a translation editor
    Edit { message_id: MessageId, lang: String, text: String },
    /// Save a draft
    Save { message_id: MessageId, lang: String },
    /// Follow a link
    GoTo(MessageId),
    /// Dismiss the overlay error
    Ok,
    /// Load the document again
    Reload,
    /// Print the current model as JSON
    Export,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    Unknown(String),

    #[error("'{command}' needs <{argument}>")]
    MissingArgument { command: &'static str, argument: &'static str },

    #[error("Invalid message id '{0}'")]
    InvalidId(String),
}

/// Usage lines printed by `help`.
pub const HELP: &str = "\
show                       render the page
select [lang]              select a language, no argument for the native view
add-lang                   open the add-language input
lang <code>                save a new language
cancel-lang                close the add-language input
edit <id> <lang> [text]    replace the translation draft
save <id> <lang>           save the translation draft
goto <id>                  follow a link
ok                         dismiss the error
reload                     load the document again
export                     print the document with saved translations
quit                       leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match name.trim_end() {
            "" => Err(CommandError::Empty),
            "show" => Ok(Self::Show),
            "select" => {
                let lang = rest.trim();
                Ok(Self::Select((!lang.is_empty()).then(|| lang.to_string())))
            }
            "add-lang" => Ok(Self::AddLanguage),
            // Blank codes are passed on; the session reports them.
            "lang" => Ok(Self::SaveLanguage(rest.to_string())),
            "cancel-lang" => Ok(Self::CancelLanguage),
            "edit" => {
                let (message_id, rest) = id_argument("edit", rest)?;
                let (lang, text) = word(rest);
                if lang.is_empty() {
                    return Err(CommandError::MissingArgument { command: "edit", argument: "lang" });
                }
                Ok(Self::Edit { message_id, lang: lang.to_string(), text: text.to_string() })
            }
            "save" => {
                let (message_id, rest) = id_argument("save", rest)?;
                let (lang, _) = word(rest);
                if lang.is_empty() {
                    return Err(CommandError::MissingArgument { command: "save", argument: "lang" });
                }
                Ok(Self::Save { message_id, lang: lang.to_string() })
            }
            "goto" => id_argument("goto", rest).map(|(id, _)| Self::GoTo(id)),
            "ok" => Ok(Self::Ok),
            "reload" => Ok(Self::Reload),
            "export" => Ok(Self::Export),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Splits off the first whitespace-separated word; the remainder keeps inner spacing.
fn word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input.split_once(char::is_whitespace).unwrap_or((input, ""))
}

fn id_argument<'a>(
    command: &'static str,
    input: &'a str,
) -> Result<(MessageId, &'a str), CommandError> {
    let (id, rest) = word(input);
    if id.is_empty() {
        return Err(CommandError::MissingArgument { command, argument: "id" });
    }
    let id = id.parse().map_err(|_| CommandError::InvalidId(id.to_string()))?;
    Ok((id, rest))
}
