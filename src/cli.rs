//! Line-oriented driver: parses commands, applies them, renders text pages.

pub mod app;
pub mod command;
pub mod render;

pub use app::{
    App,
    Reply,
    run,
};
pub use command::{
    Command,
    CommandError,
};
pub use render::render_page;
