pub mod chat;
pub mod home;
pub mod not_found;

pub use chat::ChatWindow;
pub use home::Home;
pub use not_found::PageNotFound;
