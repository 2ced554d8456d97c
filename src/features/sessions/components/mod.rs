pub mod session_list;

pub use session_list::SessionList;
