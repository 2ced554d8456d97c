pub mod components;
pub mod layout;
pub mod services;
pub mod state;

pub use components::*;
