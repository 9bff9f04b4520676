// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Views, route table and the root component
pub mod app;
