use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::components::{Analytics, AnalyticsProps};

const ICON_FONT_CSS: &str = "https://cdn.jsdelivr.net/npm/remixicon@4.2.0/fonts/remixicon.css";

/// A localized variant of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

/// Everything the document head says about a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub canonical: String,
    /// Locale the page was actually served in.
    pub locale: String,
    pub alternates: Vec<Alternate>,
}

#[derive(Properties, PartialEq)]
pub struct HeadProps {
    pub meta: DocumentMeta,
    #[prop_or_default]
    pub analytics: AnalyticsProps,
}

/// Contents of `<head>`. Rendered on the server only.
#[function_component]
pub fn Head(props: &HeadProps) -> Html {
    let meta = &props.meta;
    let og_locale = match meta.locale.as_str() {
        "zh" => "zh_CN".to_string(),
        "en" => "en_US".to_string(),
        other => other.to_string(),
    };

    html! {
        <>
            <meta charset="utf-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{&meta.title}</title>
            <meta name="description" content={meta.description.clone()} />
            if let Some(keywords) = meta.keywords.as_ref() {
                <meta name="keywords" content={keywords.clone()} />
            }
            <link rel="canonical" href={meta.canonical.clone()} />
            { for meta.alternates.iter().map(|alt| html! {
                <link rel="alternate" hreflang={alt.hreflang.clone()} href={alt.href.clone()} />
            }) }
            <meta property="og:type" content="website" />
            <meta property="og:title" content={meta.title.clone()} />
            <meta property="og:description" content={meta.description.clone()} />
            <meta property="og:url" content={meta.canonical.clone()} />
            <meta property="og:locale" content={og_locale} />
            <meta name="twitter:card" content="summary_large_image" />
            <link rel="icon" href="/imgs/logo.png" />
            <link rel="stylesheet" href={ICON_FONT_CSS} />
            <link rel="stylesheet" href="/assets/site.css" />
            <Analytics ..props.analytics.clone() />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> DocumentMeta {
        DocumentMeta {
            title: "Seedance 2.0 vs Sora 2".into(),
            description: "Compare AI video generators".into(),
            keywords: None,
            canonical: "https://example.com/zh/compare".into(),
            locale: "zh".into(),
            alternates: vec![
                Alternate { hreflang: "en".into(), href: "https://example.com/en/compare".into() },
                Alternate { hreflang: "x-default".into(), href: "https://example.com/en/compare".into() },
            ],
        }
    }

    #[tokio::test]
    async fn head_carries_canonical_and_alternates() {
        let html = yew::ServerRenderer::<Head>::with_props(|| HeadProps {
            meta: meta(),
            analytics: AnalyticsProps::default(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains("<title>Seedance 2.0 vs Sora 2</title>"));
        assert!(html.contains(r#"rel="canonical" href="https://example.com/zh/compare""#));
        assert!(html.contains(r#"hreflang="x-default""#));
        assert!(html.contains(r#"content="zh_CN""#));
        assert!(!html.contains(r#"name="keywords""#));
    }
}
