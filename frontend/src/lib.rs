//! Server-rendered, hydratable pages of the Seedance marketing site.
//!
//! The backend resolves the localized content bundles and renders [`App`]
//! (and [`head::Head`]) with `ssr`; the `hydrate` build picks up the same
//! [`AppProps`] from the page and attaches the interactive bits.

pub mod components;
pub mod content;
pub mod head;
pub mod pages;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use components::{LocaleOption, SiteFooter, SiteHeader};
use content::{ComparePage, ExamplesPage, GuidePage, LandingPage, PageContent};
use pages::{Compare, Examples, Guide, Landing};

/// Id of the element the app is rendered into.
pub const ROOT_ELEMENT_ID: &str = "app";
/// Id of the `application/json` script carrying the serialized [`AppProps`].
pub const DATA_ELEMENT_ID: &str = "__seedance_data";

/// The resolved bundle of the page being shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum PageBody {
    Landing(Arc<LandingPage>),
    Compare(Arc<ComparePage>),
    Examples(Arc<ExamplesPage>),
    Guide(Arc<GuidePage>),
}

impl PageBody {
    /// URL path of the page after the locale segment.
    pub fn path(&self) -> &'static str {
        match self {
            PageBody::Landing(_) => LandingPage::PATH,
            PageBody::Compare(_) => ComparePage::PATH,
            PageBody::Examples(_) => ExamplesPage::PATH,
            PageBody::Guide(_) => GuidePage::PATH,
        }
    }
}

#[derive(Properties, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppProps {
    /// Locale the bundles were served in.
    pub locale: String,
    pub locales: Vec<LocaleOption>,
    /// Landing bundle, which carries the shared header and footer.
    pub layout: Arc<LandingPage>,
    pub body: PageBody,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let locale = AttrValue::from(props.locale.clone());

    let main = match &props.body {
        PageBody::Landing(page) => html! { <Landing page={page.clone()} locale={locale.clone()} /> },
        PageBody::Compare(page) => html! { <Compare page={page.clone()} locale={locale.clone()} /> },
        PageBody::Examples(page) => html! { <Examples page={page.clone()} locale={locale.clone()} /> },
        PageBody::Guide(page) => html! { <Guide page={page.clone()} locale={locale.clone()} /> },
    };

    html! {
        <>
            <SiteHeader
                locale={locale.clone()}
                locales={props.locales.clone()}
                header={props.layout.header.clone()}
                path={props.body.path()}
            />
            <main>{main}</main>
            <SiteFooter locale={locale} footer={props.layout.footer.clone()} />
        </>
    }
}

/// Browser entry point: reads the embedded props and hydrates the markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("No document to hydrate");
        return;
    };
    let Some(data) = document.get_element_by_id(DATA_ELEMENT_ID) else {
        log::error!("Missing #{} element", DATA_ELEMENT_ID);
        return;
    };
    let props: AppProps = match serde_json::from_str(&data.text_content().unwrap_or_default()) {
        Ok(props) => props,
        Err(e) => {
            log::error!("Failed to parse page data: {}", e);
            return;
        }
    };
    let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) else {
        log::error!("Missing #{} element", ROOT_ELEMENT_ID);
        return;
    };
    yew::Renderer::<App>::with_root_and_props(root, props).hydrate();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_body_serializes_with_kind_tag() {
        let body = PageBody::Guide(Arc::new(GuidePage::default()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "guide");
        assert_eq!(body.path(), "/guide");
        let back: PageBody = serde_json::from_value(json).unwrap();
        assert_eq!(back, body);
    }
}
