use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// A single self-report item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based, unique within an instrument. Also the ordering key.
    pub id: u32,
    pub text: String,
    pub category: Category,
}

impl Question {
    pub fn new(id: u32, text: &str, category: Category) -> Self {
        Self {
            id,
            text: text.to_string(),
            category,
        }
    }
}
