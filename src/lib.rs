//! Chances: a terminal client for the Chances/Loterías record-keeping
//! API. One binary exposes both a one-shot CLI and an interactive TUI
//! over the same typed API client.

pub mod analytics;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod session;
pub mod system;
pub mod utils;
