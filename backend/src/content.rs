//! Localized content bundles.
//!
//! [`ContentStore`] reads `{root}/{kind}/{locale}.json` from disk. Handlers go
//! through a per-request [`RequestContent`], which normalizes the requested
//! locale, falls back to English when a bundle cannot be loaded, and hands out
//! the same `Arc` for repeated lookups within the request.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use seedance_frontend::content::PageContent;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::config::DEFAULT_LOCALE;
use crate::error::ContentError;
use crate::AppState;

/// Regional variants served by a base locale. Matched exactly.
const LOCALE_VARIANTS: [(&str, &str); 1] = [("zh-CN", "zh")];

const MAX_LOCALE_LEN: usize = 16;

/// Maps known regional variants onto their base locale and lower-cases
/// everything else.
pub fn normalize_locale(requested: &str) -> String {
    LOCALE_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == requested)
        .map(|(_, base)| base.to_string())
        .unwrap_or_else(|| requested.to_lowercase())
}

/// Only plain `[a-z0-9-]` tokens are ever turned into file names.
pub fn is_valid_locale_id(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= MAX_LOCALE_LEN
        && locale
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[derive(Debug)]
pub struct ContentStore {
    root: PathBuf,
    loads: AtomicUsize,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of bundle files read so far.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub async fn load<T>(&self, locale: &str) -> Result<T, ContentError>
    where
        T: PageContent + DeserializeOwned,
    {
        if !is_valid_locale_id(locale) {
            return Err(ContentError::InvalidLocale(locale.to_string()));
        }
        let path = self.root.join(T::DIR).join(format!("{locale}.json"));
        self.loads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(path = %path.display(), "Loading content bundle");

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ContentError::Read {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse { path, source })
    }
}

/// A bundle together with the locale it was actually served in.
#[derive(Debug)]
pub struct Resolved<T> {
    pub bundle: Arc<T>,
    pub locale: String,
}

impl<T> Clone for Resolved<T> {
    fn clone(&self) -> Self {
        Self {
            bundle: Arc::clone(&self.bundle),
            locale: self.locale.clone(),
        }
    }
}

type CacheKey = (TypeId, String);
type CacheEntry = (Arc<dyn Any + Send + Sync>, String);

#[derive(Default)]
struct RequestCache {
    bundles: HashMap<CacheKey, CacheEntry>,
    /// Normalized locales that already fell back during this request.
    fell_back: HashSet<String>,
}

/// Request-scoped resolver. Create one per request; nothing it caches
/// outlives the request.
pub struct RequestContent {
    store: Arc<ContentStore>,
    cache: Mutex<RequestCache>,
}

impl RequestContent {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(RequestCache::default()),
        }
    }

    fn cached<T>(cache: &HashMap<CacheKey, CacheEntry>, locale: &str) -> Option<Resolved<T>>
    where
        T: Send + Sync + 'static,
    {
        let (bundle, served) = cache.get(&(TypeId::of::<T>(), locale.to_string()))?;
        let bundle = Arc::clone(bundle).downcast::<T>().ok()?;
        Some(Resolved {
            bundle,
            locale: served.clone(),
        })
    }

    fn remember<T>(cache: &mut HashMap<CacheKey, CacheEntry>, locale: &str, resolved: &Resolved<T>)
    where
        T: Send + Sync + 'static,
    {
        let bundle: Arc<dyn Any + Send + Sync> = resolved.bundle.clone();
        cache.insert(
            (TypeId::of::<T>(), locale.to_string()),
            (bundle, resolved.locale.clone()),
        );
    }

    /// Resolves the bundle of kind `T` for `requested`, falling back to the
    /// default locale when it cannot be loaded. Fails only when the default
    /// bundle itself is unavailable.
    pub async fn resolve<T>(&self, requested: &str) -> Result<Resolved<T>, ContentError>
    where
        T: PageContent + DeserializeOwned + Send + Sync + 'static,
    {
        let locale = normalize_locale(requested);
        // Held across the load so a bundle is never read twice per request.
        let mut cache = self.cache.lock().await;
        if let Some(hit) = Self::cached::<T>(&cache.bundles, &locale) {
            return Ok(hit);
        }

        let resolved = match self.store.load::<T>(&locale).await {
            Ok(bundle) => Resolved {
                bundle: Arc::new(bundle),
                locale: locale.clone(),
            },
            Err(e) if locale == DEFAULT_LOCALE => return Err(e),
            Err(e) => {
                // One warning per failing locale, whichever bundle kind hits it first.
                if cache.fell_back.insert(locale.clone()) {
                    tracing::warn!(
                        requested = ?requested,
                        page = T::DIR,
                        error = %e,
                        "Content unavailable for locale, falling back to {}",
                        DEFAULT_LOCALE
                    );
                } else {
                    tracing::debug!(requested = ?requested, page = T::DIR, error = %e, "Falling back again");
                }
                match Self::cached::<T>(&cache.bundles, DEFAULT_LOCALE) {
                    Some(hit) => hit,
                    None => {
                        let fallback = Resolved {
                            bundle: Arc::new(self.store.load::<T>(DEFAULT_LOCALE).await?),
                            locale: DEFAULT_LOCALE.to_string(),
                        };
                        Self::remember(&mut cache.bundles, DEFAULT_LOCALE, &fallback);
                        fallback
                    }
                }
            }
        };

        Self::remember(&mut cache.bundles, &locale, &resolved);
        Ok(resolved)
    }
}

impl FromRequestParts<Arc<AppState>> for RequestContent {
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let store = Arc::clone(&state.content);
        async move { Ok(RequestContent::new(store)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedance_frontend::content::{ComparePage, LandingPage};
    use std::fs;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    fn bundle(title: &str) -> String {
        format!(r#"{{"meta": {{"title": "{title}", "description": "{title} description"}}}}"#)
    }

    fn content_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("landing")).unwrap();
        fs::write(dir.path().join("landing/en.json"), bundle("Seedance 2.0")).unwrap();
        fs::write(dir.path().join("landing/zh.json"), bundle("Seedance 2.0 中文")).unwrap();
        fs::write(dir.path().join("landing/de.json"), "{ not json").unwrap();
        dir
    }

    fn resolver(dir: &TempDir) -> (Arc<ContentStore>, RequestContent) {
        let store = Arc::new(ContentStore::new(dir.path()));
        (store.clone(), RequestContent::new(store))
    }

    #[test]
    fn normalizes_variants_and_case() {
        assert_eq!(normalize_locale("zh-CN"), "zh");
        assert_eq!(normalize_locale("zh-cn"), "zh-cn");
        assert_eq!(normalize_locale("ZH-CN"), "zh-cn");
        assert_eq!(normalize_locale(" zh-CN "), " zh-cn ");
        assert_eq!(normalize_locale("EN"), "en");
        assert_eq!(normalize_locale("zh-TW"), "zh-tw");
    }

    #[test]
    fn only_plain_tokens_are_valid() {
        assert!(is_valid_locale_id("en"));
        assert!(is_valid_locale_id("zh-tw"));
        assert!(!is_valid_locale_id(""));
        assert!(!is_valid_locale_id("../en"));
        assert!(!is_valid_locale_id("en.json"));
        assert!(!is_valid_locale_id("a-very-long-locale-id"));
    }

    #[tokio::test]
    async fn existing_locales_resolve_to_their_own_bundle() {
        let dir = content_dir();
        let (_, content) = resolver(&dir);

        let en = content.resolve::<LandingPage>("en").await.unwrap();
        assert_eq!(en.locale, "en");
        assert_eq!(en.bundle.meta.title, "Seedance 2.0");

        let zh = content.resolve::<LandingPage>("zh").await.unwrap();
        assert_eq!(zh.locale, "zh");
        assert_eq!(zh.bundle.meta.title, "Seedance 2.0 中文");
        assert_eq!(zh.bundle.meta.description, "Seedance 2.0 中文 description");
    }

    #[tokio::test]
    async fn regional_variant_shares_the_base_bundle() {
        let dir = content_dir();
        let (store, content) = resolver(&dir);

        let zh = content.resolve::<LandingPage>("zh").await.unwrap();
        let zh_cn = content.resolve::<LandingPage>("zh-CN").await.unwrap();
        assert!(Arc::ptr_eq(&zh.bundle, &zh_cn.bundle));
        assert_eq!(zh_cn.locale, "zh");
        assert_eq!(store.loads(), 1);
    }

    #[tokio::test]
    async fn repeated_resolution_loads_once() {
        let dir = content_dir();
        let (store, content) = resolver(&dir);

        let first = content.resolve::<LandingPage>("en").await.unwrap();
        let second = content.resolve::<LandingPage>("en").await.unwrap();
        assert!(Arc::ptr_eq(&first.bundle, &second.bundle));
        assert_eq!(store.loads(), 1);
    }

    #[tokio::test]
    #[traced_test]
    async fn unsupported_locale_falls_back_with_one_warning() {
        let dir = content_dir();
        let (store, content) = resolver(&dir);

        let fr = content.resolve::<LandingPage>("fr").await.unwrap();
        let again = content.resolve::<LandingPage>("fr").await.unwrap();
        let en = content.resolve::<LandingPage>("en").await.unwrap();

        assert_eq!(fr.locale, "en");
        assert_eq!(fr.bundle.meta.title, "Seedance 2.0");
        assert!(Arc::ptr_eq(&fr.bundle, &again.bundle));
        assert!(Arc::ptr_eq(&fr.bundle, &en.bundle));
        // One failed read for "fr", one for "en".
        assert_eq!(store.loads(), 2);

        logs_assert(|lines: &[&str]| {
            let warnings: Vec<_> = lines
                .iter()
                .filter(|line| line.contains("WARN") && line.contains("falling back"))
                .collect();
            match warnings.as_slice() {
                [line] if line.contains("\"fr\"") => Ok(()),
                other => Err(format!("expected one fallback warning for fr, got {other:?}")),
            }
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn failing_locale_warns_once_across_bundle_kinds() {
        let dir = content_dir();
        fs::create_dir_all(dir.path().join("compare")).unwrap();
        fs::write(dir.path().join("compare/en.json"), bundle("Compare")).unwrap();
        let (_, content) = resolver(&dir);

        let layout = content.resolve::<LandingPage>("fr").await.unwrap();
        let page = content.resolve::<ComparePage>("fr").await.unwrap();
        assert_eq!(layout.locale, "en");
        assert_eq!(page.locale, "en");
        assert_eq!(page.bundle.meta.title, "Compare");

        logs_assert(|lines: &[&str]| {
            let count = lines
                .iter()
                .filter(|line| line.contains("WARN") && line.contains("falling back"))
                .count();
            if count == 1 {
                Ok(())
            } else {
                Err(format!("expected one fallback warning, got {count}"))
            }
        });
    }

    #[tokio::test]
    async fn only_the_exact_regional_variant_is_mapped() {
        let dir = content_dir();
        let (_, content) = resolver(&dir);

        let lower = content.resolve::<LandingPage>("zh-cn").await.unwrap();
        assert_eq!(lower.locale, "en");
        let exact = content.resolve::<LandingPage>("zh-CN").await.unwrap();
        assert_eq!(exact.locale, "zh");
    }

    #[tokio::test]
    #[traced_test]
    async fn malformed_bundle_falls_back() {
        let dir = content_dir();
        let (_, content) = resolver(&dir);

        let de = content.resolve::<LandingPage>("de").await.unwrap();
        assert_eq!(de.locale, "en");
        assert!(logs_contain("Failed to parse"));
    }

    #[tokio::test]
    async fn unsafe_identifier_never_reaches_the_filesystem() {
        let dir = content_dir();
        let (store, content) = resolver(&dir);

        let resolved = content.resolve::<LandingPage>("../landing/zh").await.unwrap();
        assert_eq!(resolved.locale, "en");
        assert_eq!(store.loads(), 1);
    }

    #[tokio::test]
    async fn missing_default_bundle_is_an_error() {
        let dir = content_dir();
        let (_, content) = resolver(&dir);

        assert!(matches!(
            content.resolve::<ComparePage>("en").await,
            Err(ContentError::Read { .. })
        ));
        assert!(content.resolve::<ComparePage>("zh").await.is_err());
    }

    #[tokio::test]
    async fn bundle_kinds_are_cached_separately() {
        let dir = content_dir();
        fs::create_dir_all(dir.path().join("compare")).unwrap();
        fs::write(dir.path().join("compare/en.json"), bundle("Compare")).unwrap();
        let (store, content) = resolver(&dir);

        let landing = content.resolve::<LandingPage>("en").await.unwrap();
        let compare = content.resolve::<ComparePage>("en").await.unwrap();
        assert_eq!(landing.bundle.meta.title, "Seedance 2.0");
        assert_eq!(compare.bundle.meta.title, "Compare");
        assert_eq!(store.loads(), 2);
    }
}
