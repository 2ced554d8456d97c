pub mod agent_editor;
pub mod agent_market_view;
pub mod agent_sidebar;

pub use agent_editor::{AgentEditor, EditorMode};
pub use agent_market_view::AgentMarketView;
pub use agent_sidebar::AgentSidebar;
