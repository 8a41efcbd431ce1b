pub mod app;
pub mod audio;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
