pub mod icon;
pub mod nav_sidebar;

pub use icon::{Icon, IconBadge};
pub use nav_sidebar::NavSidebar;
