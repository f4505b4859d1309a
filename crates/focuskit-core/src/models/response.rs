use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One point on the four-point frequency scale shared by every question.
/// Values increase with symptom frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseOption {
    Never,
    Sometimes,
    Often,
    VeryOften,
}

impl ResponseOption {
    pub const ALL: [ResponseOption; 4] = [
        ResponseOption::Never,
        ResponseOption::Sometimes,
        ResponseOption::Often,
        ResponseOption::VeryOften,
    ];

    /// Highest value any single response can contribute.
    pub const MAX_VALUE: u8 = 3;

    pub fn value(self) -> u8 {
        match self {
            ResponseOption::Never => 0,
            ResponseOption::Sometimes => 1,
            ResponseOption::Often => 2,
            ResponseOption::VeryOften => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResponseOption::Never => "Never",
            ResponseOption::Sometimes => "Sometimes",
            ResponseOption::Often => "Often",
            ResponseOption::VeryOften => "Very Often",
        }
    }
}

impl TryFrom<u8> for ResponseOption {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ResponseOption::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CoreError::InvalidResponseValue(value))
    }
}

impl From<ResponseOption> for u8 {
    fn from(option: ResponseOption) -> Self {
        option.value()
    }
}

impl fmt::Display for ResponseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the numeric value or the label, ignoring case and
/// spacing ("very often", "VeryOften", "3").
impl FromStr for ResponseOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return ResponseOption::try_from(value);
        }

        let squashed: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();
        ResponseOption::ALL
            .into_iter()
            .find(|o| o.label().replace(' ', "").eq_ignore_ascii_case(&squashed))
            .ok_or_else(|| CoreError::UnknownResponseOption(trimmed.to_string()))
    }
}
