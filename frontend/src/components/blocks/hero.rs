use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::layout::localized_href;
use crate::content::landing::{self, HappyUsers, HeroButton};

const BADGE_SRC: &str = "/imgs/badges/phdaily.svg";

/// Splits `title` around the first occurrence of `highlight`.
pub fn split_highlight<'a>(title: &'a str, highlight: &str) -> Option<(&'a str, &'a str)> {
    if highlight.is_empty() {
        return None;
    }
    title.split_once(highlight)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: landing::Hero,
    pub locale: AttrValue,
}

fn hero_button(locale: &str, button: &HeroButton) -> Html {
    let href = button.url.as_deref().map(|url| localized_href(locale, url)).unwrap_or_default();
    let variant = button.variant.as_deref().unwrap_or("default");
    let rel = (button.target.as_deref() == Some("_blank")).then_some("noopener noreferrer");
    html! {
        <a href={href} target={button.target.clone()} rel={rel} class={classes!("button", "button-lg", format!("button-{variant}"))}>
            {&button.title}
            if let Some(icon) = button.icon.as_ref() {
                <Icon name={icon.clone()} class="button-icon" />
            }
        </a>
    }
}

fn happy_users(users: &HappyUsers) -> Html {
    html! {
        <div class="happy-users">
            <div class="avatars">
                { for users.avatars.iter().map(|src| html! {
                    <img src={src.clone()} alt="" class="avatar" loading="lazy" />
                }) }
            </div>
            <p class="happy-users-label">{&users.label}</p>
        </div>
    }
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    if hero.disabled {
        return html! {};
    }
    let locale = props.locale.as_str();
    let title = hero.title.as_deref().unwrap_or_default();
    let split = hero
        .highlight_text
        .as_deref()
        .and_then(|highlight| split_highlight(title, highlight).map(|parts| (highlight, parts)));
    let description = hero.description.clone().unwrap_or_default();

    html! {
        <>
            <div class="hero-bg" aria-hidden="true"></div>
            <section class="hero">
                <div class="container">
                    if hero.show_badge {
                        <div class="hero-badge">
                            <img src={BADGE_SRC} alt="phdaily" />
                        </div>
                    }
                    <div class="hero-content">
                        if let Some(announcement) = hero.announcement.as_ref() {
                            <a href={localized_href(locale, &announcement.url)} class="announcement">
                                if let Some(label) = announcement.label.as_ref() {
                                    <span class="badge">{label}</span>
                                }
                                <span class="announcement-title">{&announcement.title}</span>
                            </a>
                        }
                        if let Some((highlight, (before, after))) = split {
                            <h1 class="hero-title">
                                {before}
                                <span class="highlight">{highlight}</span>
                                {after}
                            </h1>
                        } else {
                            <h1 class="hero-title">{title}</h1>
                        }
                        <p class="hero-description">
                            { Html::from_html_unchecked(AttrValue::from(description)) }
                        </p>
                        if !hero.buttons.is_empty() {
                            <div class="hero-buttons">
                                { for hero.buttons.iter().map(|button| hero_button(locale, button)) }
                            </div>
                        }
                        if let Some(tip) = hero.tip.as_ref() {
                            <p class="hero-tip">{tip}</p>
                        }
                        if let Some(users) = hero.happy_users.as_ref() {
                            { happy_users(users) }
                        }
                    </div>
                </div>
            </section>
        </>
    }
}
