use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Symptom domain a question belongs to.
///
/// Declaration order is the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Organization,
    Memory,
    Attention,
    Hyperactivity,
    Impulsivity,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Organization,
        Category::Memory,
        Category::Attention,
        Category::Hyperactivity,
        Category::Impulsivity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Organization => "Organization",
            Category::Memory => "Memory",
            Category::Attention => "Attention",
            Category::Hyperactivity => "Hyperactivity",
            Category::Impulsivity => "Impulsivity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownCategory(trimmed.to_string()))
    }
}
