pub mod use_agent_catalog;

pub use use_agent_catalog::*;
