pub mod agents;
pub mod chat;
pub mod providers;
pub mod registry;
pub mod sessions;
pub mod topology;
