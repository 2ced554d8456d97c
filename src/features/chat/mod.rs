pub mod components;
pub mod services;
pub mod state;

pub use components::*;
