//! Per-resource CLI command implementations.

pub mod astro;
pub mod auth;
pub mod config;
pub mod helpers;
pub mod patterns;
pub mod sorteo_patterns;
pub mod sorteos;
pub mod tickets;
