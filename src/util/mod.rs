//! Utility modules

pub mod escape;
