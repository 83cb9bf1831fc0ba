use serde::{Deserialize, Serialize};

use super::MetaContent;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparePage {
    pub meta: MetaContent,
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub table: CompareTable,
    pub advantages: IconList,
    pub detailed: Detailed,
    pub benchmark: Benchmark,
    pub use_cases: UseCases,
    pub cta: CompareCta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareTable {
    /// Header of the first column.
    pub feature: String,
    #[serde(default)]
    pub rows: Vec<CompareRow>,
}

/// One feature row; each model cell holds a mark ("✓", "✗", "~") or a value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareRow {
    pub feature: String,
    pub seedance: String,
    pub sora: String,
    pub runway: String,
    pub veo: String,
    pub kling: String,
}

impl CompareRow {
    /// Competitor cells in column order.
    pub fn competitors(&self) -> [&str; 4] {
        [&self.sora, &self.runway, &self.veo, &self.kling]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IconItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IconList {
    pub title: String,
    #[serde(default)]
    pub items: Vec<IconItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detailed {
    pub title: String,
    pub others_label: String,
    #[serde(default)]
    pub comparisons: Vec<DetailedComparison>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailedComparison {
    pub icon: String,
    pub title: String,
    pub seedance: String,
    pub others: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Benchmark {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub scores: Vec<BenchmarkScore>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BenchmarkScore {
    pub name: String,
    pub score: String,
    pub percentage: f32,
}

impl BenchmarkScore {
    /// Bar width in percent, clamped to the drawable range.
    pub fn bar_width(&self) -> f32 {
        if self.percentage.is_nan() {
            return 0.0;
        }
        self.percentage.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCases {
    pub title: String,
    pub best_choice: String,
    #[serde(default)]
    pub items: Vec<IconItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareCta {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub button: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_clamped() {
        let score = |percentage| BenchmarkScore { percentage, ..Default::default() };
        assert_eq!(score(92.0).bar_width(), 92.0);
        assert_eq!(score(140.0).bar_width(), 100.0);
        assert_eq!(score(-3.0).bar_width(), 0.0);
        assert_eq!(score(f32::NAN).bar_width(), 0.0);
    }

    #[test]
    fn camel_case_keys_map_to_fields() {
        let json = r#"{
            "title": "Best For", "bestChoice": "Best Choice",
            "items": [{"icon": "🎵", "title": "Music Videos", "description": "Vocals."}]
        }"#;
        let use_cases: UseCases = serde_json::from_str(json).unwrap();
        assert_eq!(use_cases.best_choice, "Best Choice");
        assert_eq!(use_cases.items.len(), 1);
    }
}
