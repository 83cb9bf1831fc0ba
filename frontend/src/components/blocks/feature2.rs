use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::SectionProps;
use crate::components::carousel::{SlideAction, Slides};
use crate::components::icon::Icon;

/// Time each accordion item stays open before the next one takes over.
pub const ADVANCE_MS: u32 = 5_000;

const STYLE: &str = r#"
    .usage-progress {
        margin-top: 2rem;
        height: 1px;
        background: var(--muted);
    }
    .usage-progress-bar {
        height: 1px;
        background: var(--primary);
        animation-name: usage-progress;
        animation-timing-function: linear;
        animation-fill-mode: forwards;
    }
    @keyframes usage-progress {
        from { width: 0%; }
        to { width: 100%; }
    }
    .fade-carousel { display: grid; }
    .fade-slide {
        grid-area: 1 / 1;
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .fade-slide.active { opacity: 1; }
"#;

/// Accordion of steps beside an image carousel; the open step advances on a
/// timer and the carousel follows it.
#[function_component]
pub fn Feature2(props: &SectionProps) -> Html {
    let section = &props.section;
    let len = section.items.len();
    let slides = use_reducer(move || Slides::new(len, true));

    {
        let dispatcher = slides.dispatcher();
        use_effect_with(len, move |len| {
            dispatcher.dispatch(SlideAction::Reset(*len));
            let interval = (*len > 0)
                .then(|| Interval::new(ADVANCE_MS, move || dispatcher.dispatch(SlideAction::Next)));
            move || drop(interval)
        });
    }

    if section.disabled {
        return html! {};
    }
    let active = slides.active;

    html! {
        <section id={section.name.clone()} class="usage">
            <style>{STYLE}</style>
            <div class="container usage-grid">
                <div>
                    if let Some(label) = section.label.as_ref() {
                        <span class="badge badge-outline">{label}</span>
                    }
                    <h2>{section.title.clone().unwrap_or_default()}</h2>
                    <p class="usage-description">{section.description.clone().unwrap_or_default()}</p>
                    <div class="accordion">
                        { for section.items.iter().enumerate().map(|(index, item)| {
                            let open = index == active;
                            let onclick = {
                                let slides = slides.clone();
                                Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Select(index)))
                            };
                            html! {
                                <div
                                    class={classes!("accordion-item", open.then_some("open"))}
                                    data-state={if open { "open" } else { "closed" }}
                                >
                                    <button type="button" class="accordion-trigger" onclick={onclick} aria-expanded={open.to_string()}>
                                        if let Some(icon) = item.icon.as_ref() {
                                            <span class="accordion-icon">
                                                <Icon name={icon.clone()} />
                                            </span>
                                        }
                                        <span class="accordion-title">{item.title.clone().unwrap_or_default()}</span>
                                    </button>
                                    if open {
                                        <div class="accordion-content">
                                            {item.description.clone().unwrap_or_default()}
                                            <div class="usage-progress">
                                                <div
                                                    class="usage-progress-bar"
                                                    style={format!("animation-duration: {ADVANCE_MS}ms;")}
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </div>
                <div class="fade-carousel">
                    { for section.items.iter().enumerate().map(|(index, item)| html! {
                        <div class={classes!("fade-slide", (index == active).then_some("active"))}>
                            if let Some(image) = item.image.as_ref() {
                                <img src={image.src.clone()} alt={item.image_alt()} class="usage-image" />
                            }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
