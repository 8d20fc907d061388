//! Shared helpers used across the launcher

pub mod fs;
