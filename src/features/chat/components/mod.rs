pub mod chat_area;
pub mod message_bubble;

pub use chat_area::ChatArea;
pub use message_bubble::MessageBubble;
