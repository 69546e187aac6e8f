pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod source;
pub mod standings;
pub mod text;
// cmd and reports are binary modules, declared in main.rs.
