//! In-memory representation of a parsed message document.

pub mod message;

pub use message::{
    ImageId,
    LangMap,
    Link,
    Message,
    MessageId,
    find_message,
    find_message_mut,
};
