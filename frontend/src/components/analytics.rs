use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalyticsProps {
    #[prop_or_default]
    pub production: bool,
    #[prop_or_default]
    pub google_analytics_id: Option<String>,
    #[prop_or_default]
    pub openpanel_client_id: Option<String>,
}

/// Tracking ids end up inside inline scripts, so only plain tokens are accepted.
pub fn is_tracking_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn usable_id(id: &Option<String>) -> Option<&str> {
    let id = id.as_deref()?;
    if is_tracking_id(id) {
        Some(id)
    } else {
        log::warn!("Ignoring malformed analytics id {:?}", id);
        None
    }
}

fn google_analytics(id: &str) -> Html {
    let inline = format!(
        "<script>window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());gtag('config', '{id}');</script>"
    );
    html! {
        <>
            <script async=true src={format!("https://www.googletagmanager.com/gtag/js?id={id}")}></script>
            { Html::from_html_unchecked(AttrValue::from(inline)) }
        </>
    }
}

fn open_panel(client_id: &str) -> Html {
    let inline = format!(
        "<script>window.op = window.op || function(...args){{(window.op.q = window.op.q || []).push(args);}};\
         window.op('init', {{clientId: '{client_id}', trackScreenViews: true, trackOutgoingLinks: true, trackAttributes: true}});</script>"
    );
    html! {
        <>
            { Html::from_html_unchecked(AttrValue::from(inline)) }
            <script src="https://openpanel.dev/op1.js" defer=true async=true></script>
        </>
    }
}

/// Third-party analytics tags. Nothing is emitted outside production.
#[function_component]
pub fn Analytics(props: &AnalyticsProps) -> Html {
    if !props.production {
        return html! {};
    }

    html! {
        <>
            if let Some(id) = usable_id(&props.openpanel_client_id) {
                { open_panel(id) }
            }
            if let Some(id) = usable_id(&props.google_analytics_id) {
                { google_analytics(id) }
            }
        </>
    }
}
