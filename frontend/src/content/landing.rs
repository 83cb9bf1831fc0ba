use serde::{Deserialize, Serialize};

use super::MetaContent;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandingPage {
    pub meta: MetaContent,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub feature: Option<Section>,
    #[serde(default)]
    pub usage: Option<Section>,
    #[serde(default)]
    pub showcase: Option<Section>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub brand: Brand,
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brand {
    pub title: String,
    #[serde(default)]
    pub logo: Option<Image>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub links: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub highlight_text: Option<String>,
    /// Trusted inline HTML authored in the bundle.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub announcement: Option<Announcement>,
    #[serde(default)]
    pub buttons: Vec<HeroButton>,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub show_badge: bool,
    #[serde(default)]
    pub happy_users: Option<HappyUsers>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroButton {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HappyUsers {
    pub label: String,
    #[serde(default)]
    pub avatars: Vec<String>,
}

/// A titled block with a list of items, shared by the feature grid, the
/// usage accordion and the showcase carousel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<SectionItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl SectionItem {
    /// Alt text for the item image, falling back to the item title.
    pub fn image_alt(&self) -> String {
        self.image
            .as_ref()
            .and_then(|image| image.alt.clone())
            .or_else(|| self.title.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_bundle_deserializes_with_empty_sections() {
        let page: LandingPage = serde_json::from_str(
            r#"{"meta": {"title": "T", "description": "D"}, "feature": {"title": "F"}}"#,
        )
        .unwrap();
        assert!(page.hero.is_none());
        let feature = page.feature.unwrap();
        assert!(!feature.disabled);
        assert!(feature.items.is_empty());
    }

    #[test]
    fn image_alt_prefers_explicit_alt_then_title() {
        let mut item = SectionItem {
            title: Some("Lip sync".into()),
            image: Some(Image { src: "/imgs/a.png".into(), alt: None }),
            ..Default::default()
        };
        assert_eq!(item.image_alt(), "Lip sync");
        item.image = Some(Image { src: "/imgs/a.png".into(), alt: Some("Mouth close-up".into()) });
        assert_eq!(item.image_alt(), "Mouth close-up");
    }
}
