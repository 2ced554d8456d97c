pub mod use_sessions;

pub use use_sessions::*;
