use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use seedance_frontend::{
    components::LocaleOption,
    content::{ComparePage, ExamplesPage, GuidePage, LandingPage, PageContent},
    AppProps, PageBody,
};
use serde::de::DeserializeOwned;

use crate::{
    config::DEFAULT_LOCALE,
    content::RequestContent,
    error::AppError,
    metadata,
    render,
    AppState,
};

pub async fn redirect_root() -> Redirect {
    Redirect::temporary(&format!("/{DEFAULT_LOCALE}"))
}

/// Resolves the layout and page bundles for `requested` and renders the
/// full document.
async fn render_page<T>(
    state: &AppState,
    content: &RequestContent,
    requested: &str,
    body: fn(Arc<T>) -> PageBody,
) -> Result<Html<String>, AppError>
where
    T: PageContent + DeserializeOwned + Send + Sync + 'static,
{
    let layout = content.resolve::<LandingPage>(requested).await?;
    let page = content.resolve::<T>(requested).await?;
    tracing::debug!(
        requested = %requested,
        served = %page.locale,
        page = T::DIR,
        "Rendering page"
    );

    let meta = metadata::document_meta(&state.config, page.bundle.as_ref(), &page.locale);
    let props = AppProps {
        locale: page.locale,
        locales: state
            .config
            .locales
            .iter()
            .map(|code| LocaleOption::new(code))
            .collect(),
        layout: layout.bundle,
        body: body(page.bundle),
    };
    let html = render::render_document(&state.config, meta, props).await?;
    Ok(Html(html))
}

pub async fn landing(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    content: RequestContent,
) -> Result<Html<String>, AppError> {
    render_page::<LandingPage>(&state, &content, &locale, PageBody::Landing).await
}

pub async fn compare(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    content: RequestContent,
) -> Result<Html<String>, AppError> {
    render_page::<ComparePage>(&state, &content, &locale, PageBody::Compare).await
}

pub async fn examples(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    content: RequestContent,
) -> Result<Html<String>, AppError> {
    render_page::<ExamplesPage>(&state, &content, &locale, PageBody::Examples).await
}

pub async fn guide(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    content: RequestContent,
) -> Result<Html<String>, AppError> {
    render_page::<GuidePage>(&state, &content, &locale, PageBody::Guide).await
}
