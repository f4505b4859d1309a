//! focuskit-cli
//!
//! Terminal front end for the focuskit screeners: runs one assessment
//! session interactively, scores response vectors, and manages the local
//! config file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;
