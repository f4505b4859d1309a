//! focuskit-core
//!
//! Pure domain types shared by every focuskit crate: symptom categories,
//! questions and the four-point response scale. No I/O.

pub mod error;
pub mod models;
