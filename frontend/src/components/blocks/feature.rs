use yew::prelude::*;

use super::SectionProps;
use crate::components::icon::Icon;

#[function_component]
pub fn Feature(props: &SectionProps) -> Html {
    let section = &props.section;
    if section.disabled {
        return html! {};
    }

    html! {
        <section id={section.name.clone()} class="feature">
            <div class="container">
                <div class="section-heading">
                    <h2>{section.title.clone().unwrap_or_default()}</h2>
                    <p>{section.description.clone().unwrap_or_default()}</p>
                </div>
                <div class="card-grid">
                    { for section.items.iter().map(|item| html! {
                        <div class="feature-card">
                            if let Some(icon) = item.icon.as_ref() {
                                <div class="feature-icon">
                                    <Icon name={icon.clone()} />
                                </div>
                            }
                            <h3>{item.title.clone().unwrap_or_default()}</h3>
                            <p>{item.description.clone().unwrap_or_default()}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
