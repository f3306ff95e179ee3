//! Process-level plumbing: logging setup.

pub mod logging;
