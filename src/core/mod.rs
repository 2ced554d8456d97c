pub mod config;
pub mod console;
pub mod models;
pub mod services;
pub mod time;
