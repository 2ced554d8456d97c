pub mod components;
pub mod editor;
pub mod hooks;
pub mod services;
pub mod state;

pub use components::*;
