use std::sync::Arc;

use yew::prelude::*;

use crate::components::blocks::{Feature, Feature2, Hero, Showcase};
use crate::content::LandingPage;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub page: Arc<LandingPage>,
    pub locale: AttrValue,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with((), |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let page = &props.page;
    html! {
        <div class="landing-page">
            if let Some(hero) = page.hero.as_ref() {
                <Hero hero={hero.clone()} locale={props.locale.clone()} />
            }
            if let Some(section) = page.feature.as_ref() {
                <Feature section={section.clone()} />
            }
            if let Some(section) = page.usage.as_ref() {
                <Feature2 section={section.clone()} />
            }
            if let Some(section) = page.showcase.as_ref() {
                <Showcase section={section.clone()} />
            }
        </div>
    }
}
