use std::sync::Arc;

use yew::prelude::*;

use super::TRY_URL;
use crate::components::{localized_href, Icon};
use crate::content::examples::Example;
use crate::content::ExamplesPage;

fn example_card(example: &Example, prompt_label: &str) -> Html {
    html! {
        <article class="card example-card">
            <div class="example-card-header">
                <h3>{&example.title}</h3>
                <span class="badge">
                    <Icon name="RiTimeLine" />
                    {&example.duration}
                </span>
            </div>
            <p>{&example.description}</p>
            <div class="example-tags">
                { for example.tags.iter().map(|tag| html! { <span class="tag">{tag}</span> }) }
            </div>
            <div class="prompt-block">
                <div class="prompt-label">{prompt_label}</div>
                <pre class="prompt-text">{&example.prompt}</pre>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExamplesProps {
    pub page: Arc<ExamplesPage>,
    pub locale: AttrValue,
}

#[function_component(Examples)]
pub fn examples(props: &ExamplesProps) -> Html {
    let page = &props.page;

    html! {
        <div class="examples-page">
            <section class="page-hero container">
                <h1>{&page.title}</h1>
                <p class="page-subtitle">{&page.subtitle}</p>
                <nav class="category-links">
                    { for page.categories.iter().map(|category| html! {
                        <a href={format!("#{}", category.id)} class="category-link">
                            <span>{&category.icon}</span>
                            {&category.name}
                        </a>
                    }) }
                </nav>
            </section>

            { for page.categories.iter().map(|category| html! {
                <section id={category.id.clone()} class="container example-category">
                    <h2>
                        <span class="category-icon">{&category.icon}</span>
                        {&category.name}
                    </h2>
                    <div class="card-grid">
                        { for category.examples.iter().map(|example| example_card(example, &page.prompt_label)) }
                    </div>
                </section>
            }) }

            <section class="container page-cta">
                <h2>{&page.cta.title}</h2>
                <p>{&page.cta.description}</p>
                <div class="cta-buttons">
                    <a href={TRY_URL} target="_blank" rel="noopener noreferrer" class="button button-default">
                        {&page.cta.primary_button}
                        <Icon name="RiArrowRightLine" />
                    </a>
                    <a href={localized_href(&props.locale, "/guide")} class="button button-outline">
                        {&page.cta.secondary_button}
                    </a>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::examples::{ExampleCategory, ExamplesCta};

    #[tokio::test]
    async fn categories_link_to_their_sections_and_cta_keeps_locale() {
        let page = ExamplesPage {
            title: "Seedance 2.0 Examples".into(),
            prompt_label: "Prompt".into(),
            categories: vec![ExampleCategory {
                id: "dialogue".into(),
                name: "Dialogue".into(),
                icon: "💬".into(),
                examples: vec![Example {
                    title: "Corporate Introduction".into(),
                    duration: "0:15".into(),
                    tags: vec!["English".into(), "Lip-sync".into()],
                    prompt: "A professional woman speaks to camera.".into(),
                    ..Default::default()
                }],
            }],
            cta: ExamplesCta {
                secondary_button: "Read the Guide".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = yew::ServerRenderer::<Examples>::with_props(move || ExamplesProps {
            page: Arc::new(page),
            locale: "zh".into(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(html.contains(r##"href="#dialogue""##));
        assert!(html.contains(r#"id="dialogue""#));
        assert_eq!(html.matches(r#"class="tag""#).count(), 2);
        assert!(html.contains(r#"href="/zh/guide""#));
    }
}
