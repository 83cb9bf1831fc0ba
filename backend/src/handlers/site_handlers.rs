use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use seedance_frontend::content::PAGE_PATHS;

use crate::{config::DEFAULT_LOCALE, metadata::page_url, AppState};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            state.config.web_url
        ),
    )
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let config = &state.config;
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    for path in PAGE_PATHS {
        for locale in &config.locales {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", page_url(&config.web_url, locale, path)));
            for alternate in &config.locales {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    alternate,
                    page_url(&config.web_url, alternate, path)
                ));
            }
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\"/>\n",
                page_url(&config.web_url, DEFAULT_LOCALE, path)
            ));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            let priority = if path.is_empty() { "1.0" } else { "0.8" };
            xml.push_str(&format!("    <priority>{priority}</priority>\n"));
            xml.push_str("  </url>\n");
        }
    }
    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}
