pub mod errors;
pub mod logging;

// Available on every platform (web and desktop)
pub mod hooks;
