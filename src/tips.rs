//! Safety tips filtered by category.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::TipCatalog;
use crate::models::{normalize, TipRecord};

/// The curated tip categories offered to the coordinator.
pub const TIP_CATEGORIES: [&str; 5] = [
    "Evacuation & Movement",
    "Staying Indoors",
    "Health & Hygiene",
    "Communication & Information",
    "Utilities & Equipment",
];

/// Tip texts whose category matches any requested category, in dataset order.
///
/// Matching is on normalized categories. Unknown categories match nothing.
pub fn filter_tips<S: AsRef<str>>(tips: &[TipRecord], categories: &[S]) -> Vec<String> {
    let wanted: HashSet<String> = categories.iter().map(|c| normalize(c.as_ref())).collect();

    tips.iter()
        .filter(|entry| wanted.contains(&normalize(&entry.category)))
        .map(|entry| entry.tip.clone())
        .collect()
}

/// Tip filter over a shared tip catalog
#[derive(Debug, Clone)]
pub struct TipFilter {
    tips: Arc<TipCatalog>,
}

impl TipFilter {
    pub fn new(tips: Arc<TipCatalog>) -> Self {
        Self { tips }
    }

    pub fn filter<S: AsRef<str>>(&self, categories: &[S]) -> Vec<String> {
        filter_tips(self.tips.records(), categories)
    }
}
