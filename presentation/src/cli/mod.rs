//! Command-line argument definitions

pub mod commands;
