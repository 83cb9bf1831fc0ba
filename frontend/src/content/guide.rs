use serde::{Deserialize, Serialize};

use super::compare::IconList;
use super::MetaContent;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuidePage {
    pub meta: MetaContent,
    pub title: String,
    pub subtitle: String,
    pub quick_start: QuickStart,
    pub prompt_guide: PromptGuide,
    pub lip_sync: LipSync,
    pub multi_shot: MultiShot,
    pub best_practices: IconList,
    pub cta: GuideCta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuickStart {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptGuide {
    pub title: String,
    pub intro: String,
    pub structure: PromptStructure,
    pub examples: PromptExamples,
    pub tips: Tips,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptStructure {
    pub title: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptExamples {
    pub title: String,
    #[serde(default)]
    pub items: Vec<PromptExample>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptExample {
    pub category: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tips {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LipSync {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Language {
    pub flag: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiShot {
    pub title: String,
    pub intro: String,
    pub example: MultiShotExample,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiShotExample {
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideCta {
    pub title: String,
    pub description: String,
    pub button: String,
}
