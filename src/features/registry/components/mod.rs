pub mod skills_view;
pub mod tools_view;

pub use skills_view::SkillsView;
pub use tools_view::ToolsView;
