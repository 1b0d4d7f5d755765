//! Command implementations for the prion CLI

pub mod completions;
pub mod config;
pub mod helpers;
pub mod install;
pub mod list;
pub mod reinstall;
pub mod remove;
pub mod update;
pub mod version;
