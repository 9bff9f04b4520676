pub mod chat_layout;
pub mod chat_sidebar;
pub mod navbar;

pub use chat_layout::ChatLayout;
pub use chat_sidebar::ChatSidebar;
pub use navbar::Navbar;
