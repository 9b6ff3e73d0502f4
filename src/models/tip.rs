use serde::{Deserialize, Serialize};

/// One curated safety tip and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipRecord {
    pub category: String,
    pub tip: String,
}

impl TipRecord {
    pub fn new(category: &str, tip: &str) -> Self {
        Self {
            category: category.to_string(),
            tip: tip.to_string(),
        }
    }
}
