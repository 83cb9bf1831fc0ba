use seedance_frontend::content::PageContent;
use seedance_frontend::head::{Alternate, DocumentMeta};

use crate::config::{Config, DEFAULT_LOCALE};

/// Absolute URL of a page in the given locale.
pub fn page_url(web_url: &str, locale: &str, path: &str) -> String {
    format!("{web_url}/{locale}{path}")
}

/// Head metadata for a page bundle served in `locale`.
pub fn document_meta<T: PageContent>(config: &Config, page: &T, locale: &str) -> DocumentMeta {
    let meta = page.meta();
    let mut alternates: Vec<Alternate> = config
        .locales
        .iter()
        .map(|l| Alternate {
            hreflang: l.clone(),
            href: page_url(&config.web_url, l, T::PATH),
        })
        .collect();
    alternates.push(Alternate {
        hreflang: "x-default".to_string(),
        href: page_url(&config.web_url, DEFAULT_LOCALE, T::PATH),
    });

    DocumentMeta {
        title: meta.title.clone(),
        description: meta.description.clone(),
        keywords: meta.keywords.clone(),
        canonical: page_url(&config.web_url, locale, T::PATH),
        locale: locale.to_string(),
        alternates,
    }
}
