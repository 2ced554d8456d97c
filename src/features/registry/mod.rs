pub mod components;
pub mod icons;
pub mod services;
pub mod state;

pub use components::*;
