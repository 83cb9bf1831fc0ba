use std::sync::Arc;

use yew::prelude::*;

use super::TRY_URL;
use crate::components::Icon;
use crate::content::GuidePage;

#[derive(Properties, PartialEq)]
pub struct GuideProps {
    pub page: Arc<GuidePage>,
    pub locale: AttrValue,
}

#[function_component(Guide)]
pub fn guide(props: &GuideProps) -> Html {
    let page = &props.page;
    let prompt_guide = &page.prompt_guide;

    html! {
        <div class="guide-page">
            <section class="page-hero container">
                <h1>{&page.title}</h1>
                <p class="page-subtitle">{&page.subtitle}</p>
            </section>

            <section class="container">
                <h2>{&page.quick_start.title}</h2>
                <ol class="steps">
                    { for page.quick_start.steps.iter().enumerate().map(|(i, step)| html! {
                        <li class="step">
                            <span class="step-number">{i + 1}</span>
                            <div>
                                <h3>{&step.title}</h3>
                                <p>{&step.description}</p>
                            </div>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="container">
                <h2>{&prompt_guide.title}</h2>
                <p>{&prompt_guide.intro}</p>
                <div class="card">
                    <h3>{&prompt_guide.structure.title}</h3>
                    <pre class="prompt-text">{&prompt_guide.structure.template}</pre>
                </div>
                <h3>{&prompt_guide.examples.title}</h3>
                { for prompt_guide.examples.items.iter().map(|item| html! {
                    <div class="prompt-block">
                        <div class="prompt-label">{&item.category}</div>
                        <pre class="prompt-text">{&item.prompt}</pre>
                    </div>
                }) }
                <div class="card tips">
                    <h3>
                        <Icon name="RiLightbulbLine" />
                        {&prompt_guide.tips.title}
                    </h3>
                    <ul>
                        { for prompt_guide.tips.items.iter().map(|tip| html! { <li>{tip}</li> }) }
                    </ul>
                </div>
            </section>

            <section class="container">
                <h2>{&page.lip_sync.title}</h2>
                <p>{&page.lip_sync.intro}</p>
                <div class="language-grid">
                    { for page.lip_sync.languages.iter().map(|language| html! {
                        <div class="language">
                            <span class="language-flag">{&language.flag}</span>
                            <span>{&language.name}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="container">
                <h2>{&page.multi_shot.title}</h2>
                <p>{&page.multi_shot.intro}</p>
                <div class="prompt-block">
                    <div class="prompt-label">{&page.multi_shot.example.title}</div>
                    <pre class="prompt-text">{&page.multi_shot.example.prompt}</pre>
                </div>
            </section>

            <section class="container">
                <h2>{&page.best_practices.title}</h2>
                <div class="card-grid">
                    { for page.best_practices.items.iter().map(|item| html! {
                        <div class="card">
                            <span class="card-icon">{&item.icon}</span>
                            <h3>{&item.title}</h3>
                            <p>{&item.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="container page-cta">
                <h2>{&page.cta.title}</h2>
                <p>{&page.cta.description}</p>
                <a href={TRY_URL} target="_blank" rel="noopener noreferrer" class="button button-default">
                    {&page.cta.button}
                    <Icon name="RiArrowRightLine" />
                </a>
            </section>
        </div>
    }
}
