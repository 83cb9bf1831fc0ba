//! Typed shapes of the per-locale content bundles.
//!
//! Every page kind has one JSON file per locale under `content/<dir>/<locale>.json`.
//! The structs here mirror those files; optional fields and lists default to
//! empty so a sparse bundle still deserializes and simply renders less.

pub mod compare;
pub mod examples;
pub mod guide;
pub mod landing;

use serde::{Deserialize, Serialize};

pub use compare::ComparePage;
pub use examples::ExamplesPage;
pub use guide::GuidePage;
pub use landing::LandingPage;

/// Search-engine facing metadata carried by every bundle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaContent {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// A content bundle kind.
pub trait PageContent {
    /// Directory under the content root holding one file per locale.
    const DIR: &'static str;
    /// URL path after the locale segment, empty for the landing page.
    const PATH: &'static str;

    fn meta(&self) -> &MetaContent;
}

impl PageContent for LandingPage {
    const DIR: &'static str = "landing";
    const PATH: &'static str = "";

    fn meta(&self) -> &MetaContent {
        &self.meta
    }
}

impl PageContent for ComparePage {
    const DIR: &'static str = "compare";
    const PATH: &'static str = "/compare";

    fn meta(&self) -> &MetaContent {
        &self.meta
    }
}

impl PageContent for ExamplesPage {
    const DIR: &'static str = "examples";
    const PATH: &'static str = "/examples";

    fn meta(&self) -> &MetaContent {
        &self.meta
    }
}

impl PageContent for GuidePage {
    const DIR: &'static str = "guide";
    const PATH: &'static str = "/guide";

    fn meta(&self) -> &MetaContent {
        &self.meta
    }
}

/// URL paths of every page, in sitemap order.
pub const PAGE_PATHS: [&str; 4] = [
    LandingPage::PATH,
    ExamplesPage::PATH,
    ComparePage::PATH,
    GuidePage::PATH,
];
