//! focuskit-export
//!
//! Text reports for completed assessments, rendered from Tera templates.

pub mod error;
pub mod render;
