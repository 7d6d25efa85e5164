//! Category detection from an ordered keyword lexicon.

use serde::{Deserialize, Serialize};

/// Category label reported when no keyword matches.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A category label with the keyword substrings that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The built-in category lexicon.
///
/// Order is load-bearing: [`scan_category`] walks the rules front to back
/// and the first rule with any keyword hit wins, regardless of where in the
/// text the keyword sits.
pub fn default_lexicon() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "groceries",
            &["grocery", "supermarket", "walmart", "target", "safeway"],
        ),
        CategoryRule::new(
            "dining",
            &["restaurant", "cafe", "dining", "food", "pizza", "burger"],
        ),
        CategoryRule::new("fuel", &["gas", "fuel", "station", "exxon", "shell"]),
        CategoryRule::new("shopping", &["shop", "store", "mall", "retail"]),
        CategoryRule::new("transport", &["uber", "lyft", "taxi", "bus", "train"]),
    ]
}

/// Pick the first rule whose keyword set has a substring hit in any line.
pub fn scan_category(lines: &[String], lexicon: &[CategoryRule]) -> String {
    for rule in lexicon {
        let hit = lines.iter().any(|line| {
            rule.keywords
                .iter()
                .any(|keyword| line.contains(keyword.as_str()))
        });
        if hit {
            return rule.label.clone();
        }
    }

    UNKNOWN_CATEGORY.to_string()
}
