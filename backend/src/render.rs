//! Wraps server-rendered component markup in a full HTML document.

use seedance_frontend::components::AnalyticsProps;
use seedance_frontend::head::{DocumentMeta, Head, HeadProps};
use seedance_frontend::{App, AppProps, DATA_ELEMENT_ID, ROOT_ELEMENT_ID};
use yew::ServerRenderer;

use crate::config::Config;
use crate::error::AppError;

/// Makes serialized JSON safe to embed in a `<script>` element.
pub fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn analytics(config: &Config) -> AnalyticsProps {
    AnalyticsProps {
        production: config.environment.is_production(),
        google_analytics_id: config.google_analytics_id.clone(),
        openpanel_client_id: config.openpanel_client_id.clone(),
    }
}

pub async fn render_document(
    config: &Config,
    meta: DocumentMeta,
    props: AppProps,
) -> Result<String, AppError> {
    let lang = props.locale.clone();
    let hydrate = config.client_bundle.is_some();
    let data = if hydrate {
        Some(escape_script_json(&serde_json::to_string(&props)?))
    } else {
        None
    };

    let analytics = analytics(config);
    let head = ServerRenderer::<Head>::with_props(move || HeadProps { meta, analytics })
        .hydratable(false)
        .render()
        .await;
    let body = ServerRenderer::<App>::with_props(move || props)
        .hydratable(hydrate)
        .render()
        .await;

    let mut html = String::with_capacity(head.len() + body.len() + 256);
    html.push_str("<!DOCTYPE html>");
    html.push_str(&format!("<html lang=\"{lang}\"><head>{head}</head><body>"));
    html.push_str(&format!("<div id=\"{ROOT_ELEMENT_ID}\">{body}</div>"));
    if let (Some(data), Some(bundle)) = (data, config.client_bundle.as_deref()) {
        html.push_str(&format!(
            "<script id=\"{DATA_ELEMENT_ID}\" type=\"application/json\">{data}</script>"
        ));
        html.push_str(&format!("<script type=\"module\" src=\"{bundle}\"></script>"));
    }
    html.push_str("</body></html>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_cannot_close_the_element() {
        let json = serde_json::json!({ "title": "</script><script>alert(1)</script>" }).to_string();
        let escaped = escape_script_json(&json);
        assert!(!escaped.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back["title"], "</script><script>alert(1)</script>");
    }
}
