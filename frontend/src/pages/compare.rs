use std::sync::Arc;

use yew::prelude::*;

use super::TRY_URL;
use crate::components::Icon;
use crate::content::compare::{BenchmarkScore, CompareRow, IconItem};
use crate::content::ComparePage;

const COLUMNS: [&str; 5] = ["Seedance 2.0", "Sora", "Runway Gen-3", "Veo 3", "Kling"];

const STYLE: &str = r#"
    .compare-table { width: 100%; border-collapse: collapse; }
    .compare-table th, .compare-table td { padding: 14px 16px; text-align: center; }
    .compare-table td:first-child, .compare-table th:first-child { text-align: left; }
    .compare-table .highlight-col { background: rgba(124, 58, 237, 0.08); font-weight: 600; }
    .mark-yes { color: #22c55e; }
    .mark-no { color: #ef4444; }
    .mark-partial { color: #eab308; }
    .benchmark-track { height: 10px; border-radius: 999px; background: rgba(255, 255, 255, 0.08); }
    .benchmark-fill { height: 100%; border-radius: 999px; background: #52525b; }
    .benchmark-row.first .benchmark-fill { background: linear-gradient(90deg, #7c3aed, #ec4899); }
"#;

/// What a comparison cell says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark<'a> {
    Yes,
    No,
    Partial,
    Text(&'a str),
}

impl<'a> CellMark<'a> {
    pub fn classify(value: &'a str) -> Self {
        match value.trim() {
            "✓" => Self::Yes,
            "✗" => Self::No,
            "~" => Self::Partial,
            _ => Self::Text(value),
        }
    }
}

fn cell(value: &str, highlight: bool) -> Html {
    let content = match CellMark::classify(value) {
        CellMark::Yes => html! { <Icon name="RiCheckLine" class="mark-yes" /> },
        CellMark::No => html! { <Icon name="RiCloseLine" class="mark-no" /> },
        CellMark::Partial => html! { <span class="mark-partial">{"~"}</span> },
        CellMark::Text(text) => html! { {text} },
    };
    html! {
        <td class={classes!(highlight.then_some("highlight-col"))}>{content}</td>
    }
}

fn table_row(row: &CompareRow) -> Html {
    html! {
        <tr class="compare-row">
            <td>{&row.feature}</td>
            { cell(&row.seedance, true) }
            { for row.competitors().into_iter().map(|value| cell(value, false)) }
        </tr>
    }
}

fn icon_card(item: &IconItem) -> Html {
    html! {
        <div class="card">
            <span class="card-icon">{&item.icon}</span>
            <h3>{&item.title}</h3>
            <p>{&item.description}</p>
        </div>
    }
}

fn benchmark_row(index: usize, score: &BenchmarkScore) -> Html {
    html! {
        <div class={classes!("benchmark-row", (index == 0).then_some("first"))}>
            <div class="benchmark-label">
                <span>{&score.name}</span>
                <span>{&score.score}</span>
            </div>
            <div class="benchmark-track">
                <div class="benchmark-fill" style={format!("width: {}%;", score.bar_width())}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompareProps {
    pub page: Arc<ComparePage>,
    pub locale: AttrValue,
}

#[function_component(Compare)]
pub fn compare(props: &CompareProps) -> Html {
    let page = &props.page;

    html! {
        <div class="compare-page">
            <style>{STYLE}</style>
            <section class="page-hero container">
                <span class="badge">
                    <Icon name="RiTrophyLine" />
                    {&page.badge}
                </span>
                <h1>{&page.title}</h1>
                <p class="page-subtitle">{&page.subtitle}</p>
            </section>

            <section class="container">
                <div class="table-scroll">
                    <table class="compare-table">
                        <thead>
                            <tr>
                                <th>{&page.table.feature}</th>
                                { for COLUMNS.iter().enumerate().map(|(i, name)| html! {
                                    <th class={classes!((i == 0).then_some("highlight-col"))}>{*name}</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for page.table.rows.iter().map(table_row) }
                        </tbody>
                    </table>
                </div>
            </section>

            <section class="container">
                <h2>{&page.advantages.title}</h2>
                <div class="card-grid">
                    { for page.advantages.items.iter().map(icon_card) }
                </div>
            </section>

            <section class="container">
                <h2>{&page.detailed.title}</h2>
                { for page.detailed.comparisons.iter().map(|item| html! {
                    <div class="card detailed-comparison">
                        <h3>
                            <span class="card-icon">{&item.icon}</span>
                            {&item.title}
                        </h3>
                        <div class="detailed-columns">
                            <div class="detailed-ours">
                                <h4>{COLUMNS[0]}</h4>
                                <p>{&item.seedance}</p>
                            </div>
                            <div class="detailed-others">
                                <h4>{&page.detailed.others_label}</h4>
                                <p>{&item.others}</p>
                            </div>
                        </div>
                    </div>
                }) }
            </section>

            <section class="container benchmark">
                <h2>{&page.benchmark.title}</h2>
                <p>{&page.benchmark.description}</p>
                { for page.benchmark.scores.iter().enumerate().map(|(i, score)| benchmark_row(i, score)) }
                <p class="benchmark-source">{&page.benchmark.source}</p>
            </section>

            <section class="container">
                <h2>{&page.use_cases.title}</h2>
                <div class="card-grid">
                    { for page.use_cases.items.iter().map(|item| html! {
                        <div class="card">
                            <span class="card-icon">{&item.icon}</span>
                            <h3>{&item.title}</h3>
                            <p>{&item.description}</p>
                            <span class="badge">{&page.use_cases.best_choice}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="container page-cta">
                <span class="badge">{&page.cta.badge}</span>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::compare::CompareTable;

    #[test]
    fn cells_classify_marks_and_values() {
        assert_eq!(CellMark::classify("✓"), CellMark::Yes);
        assert_eq!(CellMark::classify("✗"), CellMark::No);
        assert_eq!(CellMark::classify(" ~ "), CellMark::Partial);
        assert_eq!(CellMark::classify("1080p"), CellMark::Text("1080p"));
    }

    async fn render(page: ComparePage) -> String {
        yew::ServerRenderer::<Compare>::with_props(move || CompareProps {
            page: Arc::new(page),
            locale: "en".into(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn zero_rows_render_no_row_markup() {
        let html = render(ComparePage {
            title: "Seedance 2.0 vs The Competition".into(),
            table: CompareTable { feature: "Feature".into(), rows: Vec::new() },
            ..Default::default()
        })
        .await;
        assert!(html.contains("Seedance 2.0 vs The Competition"));
        assert!(!html.contains("compare-row"));
    }

    #[tokio::test]
    async fn rows_render_marks_and_text() {
        let html = render(ComparePage {
            table: CompareTable {
                feature: "Feature".into(),
                rows: vec![CompareRow {
                    feature: "Max Resolution".into(),
                    seedance: "2K".into(),
                    sora: "✗".into(),
                    runway: "~".into(),
                    veo: "✓".into(),
                    kling: "1080p".into(),
                }],
            },
            ..Default::default()
        })
        .await;
        assert_eq!(html.matches(r#"class="compare-row""#).count(), 1);
        assert!(html.contains("ri-close-line"));
        assert!(html.contains("ri-check-line"));
        assert!(html.contains("1080p"));
    }
}
