pub mod agent_operations;
pub mod roster_operations;

pub use agent_operations::*;
pub use roster_operations::*;
