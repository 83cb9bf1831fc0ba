use serde::{Deserialize, Serialize};

use super::MetaContent;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExamplesPage {
    pub meta: MetaContent,
    pub title: String,
    pub subtitle: String,
    pub prompt_label: String,
    pub categories: Vec<ExampleCategory>,
    pub cta: ExamplesCta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExampleCategory {
    /// Anchor id used by the jump links.
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplesCta {
    pub title: String,
    pub description: String,
    pub primary_button: String,
    pub secondary_button: String,
}
