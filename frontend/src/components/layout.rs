use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::content::landing::{Footer, Header, NavItem};

/// A locale offered by the locale switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOption {
    pub code: String,
    pub label: String,
}

impl LocaleOption {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            label: locale_label(code).to_string(),
        }
    }
}

/// Native display name of a locale code.
pub fn locale_label(code: &str) -> &str {
    match code {
        "en" => "English",
        "zh" => "中文",
        other => other,
    }
}

/// Prefixes site-relative links with the locale segment; external links,
/// protocol-relative links and anchors pass through.
pub fn localized_href(locale: &str, url: &str) -> String {
    if !url.starts_with('/') || url.starts_with("//") {
        return url.to_string();
    }
    if url == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{url}")
    }
}

fn nav_link(locale: &str, item: &NavItem) -> Html {
    html! {
        <a href={localized_href(locale, &item.url)} target={item.target.clone()} class="nav-link">
            {&item.title}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub locale: AttrValue,
    pub locales: Vec<LocaleOption>,
    #[prop_or_default]
    pub header: Option<Header>,
    /// Path of the current page after the locale segment.
    #[prop_or_default]
    pub path: AttrValue,
}

#[function_component]
pub fn SiteHeader(props: &SiteHeaderProps) -> Html {
    let Some(header) = props.header.as_ref() else {
        return html! {};
    };
    let locale = props.locale.as_str();
    let brand_href = localized_href(locale, header.brand.url.as_deref().unwrap_or("/"));

    html! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href={brand_href} class="brand">
                    if let Some(logo) = header.brand.logo.as_ref() {
                        <img src={logo.src.clone()} alt={logo.alt.clone().unwrap_or_else(|| header.brand.title.clone())} class="brand-logo" />
                    }
                    <span class="brand-title">{&header.brand.title}</span>
                </a>
                <nav class="site-nav">
                    { for header.nav.iter().map(|item| nav_link(locale, item)) }
                </nav>
                <div class="locale-switcher">
                    { for props.locales.iter().map(|option| {
                        let current = option.code == locale;
                        html! {
                            <a
                                href={format!("/{}{}", option.code, props.path)}
                                hreflang={option.code.clone()}
                                class={classes!("locale-option", current.then_some("active"))}
                                aria-current={current.then_some("page")}
                            >
                                {&option.label}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub locale: AttrValue,
    #[prop_or_default]
    pub footer: Option<Footer>,
}

#[function_component]
pub fn SiteFooter(props: &SiteFooterProps) -> Html {
    let Some(footer) = props.footer.as_ref() else {
        return html! {};
    };
    let locale = props.locale.as_str();

    html! {
        <footer class="site-footer">
            <div class="container site-footer-inner">
                <nav class="footer-links">
                    { for footer.links.iter().map(|item| nav_link(locale, item)) }
                </nav>
                if let Some(copyright) = footer.copyright.as_ref() {
                    <p class="copyright">{copyright}</p>
                }
            </div>
        </footer>
    }
}
