pub mod auth;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod tui;
