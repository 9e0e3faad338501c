//! Session state machine and the page description built from it.

pub mod state;
pub mod view;

pub use state::{
    OperationError,
    SessionState,
};
pub use view::{
    LinkTranslation,
    LinkView,
    MessageView,
    PageView,
    TextView,
    build_page,
};
