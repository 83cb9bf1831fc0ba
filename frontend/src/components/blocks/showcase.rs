use web_sys::HtmlVideoElement;
use yew::prelude::*;

use super::SectionProps;
use crate::components::carousel::{SlideAction, Slides};
use crate::components::icon::Icon;
use crate::content::landing::SectionItem;

const STYLE: &str = r#"
    .showcase-viewport { overflow: hidden; }
    .showcase-track {
        display: flex;
        gap: 20px;
        transition: transform 0.4s ease;
        transform: translateX(calc(var(--active) * -420px));
    }
    .showcase-slide { flex: 0 0 400px; max-width: 400px; }
    .video-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.3);
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .video-overlay.visible { opacity: 1; }
    @media (max-width: 768px) {
        .showcase-track { transform: translateX(calc(var(--active) * -340px)); }
        .showcase-slide { flex-basis: 320px; max-width: 320px; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub item: SectionItem,
}

/// A showcase card. Hovering previews the video; pressing play keeps it
/// running after the pointer leaves.
#[function_component]
pub fn VideoCard(props: &VideoCardProps) -> Html {
    let item = &props.item;
    let video_ref = use_node_ref();
    let playing = use_state(|| false);
    let pinned = use_state(|| false);
    let muted = use_state(|| true);
    let hovered = use_state(|| false);

    let on_play_pause = {
        let video_ref = video_ref.clone();
        let playing = playing.clone();
        let pinned = pinned.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if *playing {
                if let Err(err) = video.pause() {
                    log::warn!("Failed to pause video: {:?}", err);
                }
                playing.set(false);
                pinned.set(false);
            } else {
                if let Err(err) = video.play() {
                    log::warn!("Failed to play video: {:?}", err);
                }
                playing.set(true);
                pinned.set(true);
            }
        })
    };

    let on_mute_toggle = {
        let video_ref = video_ref.clone();
        let muted = muted.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(!*muted);
                muted.set(!*muted);
            }
        })
    };

    let on_mouse_enter = {
        let video_ref = video_ref.clone();
        let playing = playing.clone();
        let hovered = hovered.clone();
        let has_video = item.video_url.is_some();
        Callback::from(move |_: MouseEvent| {
            hovered.set(true);
            if !has_video {
                return;
            }
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if let Err(err) = video.play() {
                    log::warn!("Failed to start preview: {:?}", err);
                }
                playing.set(true);
            }
        })
    };

    let on_mouse_leave = {
        let video_ref = video_ref.clone();
        let playing = playing.clone();
        let pinned = pinned.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            if *pinned {
                return;
            }
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if let Err(err) = video.pause() {
                    log::warn!("Failed to stop preview: {:?}", err);
                }
                video.set_current_time(0.0);
                playing.set(false);
            }
        })
    };

    let poster = item.image.as_ref().map(|image| image.src.clone());

    html! {
        <div class="video-card" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <div class="video-frame">
                if let Some(video_url) = item.video_url.as_ref() {
                    <video
                        ref={video_ref}
                        src={video_url.clone()}
                        poster={poster}
                        class="video-media"
                        muted={*muted}
                        loop=true
                        playsinline=true
                        preload="metadata"
                    ></video>
                    <div class={classes!("video-overlay", hovered.then_some("visible"))}>
                        <button type="button" class="round-button" onclick={on_play_pause}>
                            <Icon name={if *playing { "RiPauseFill" } else { "RiPlayFill" }} />
                        </button>
                        <button type="button" class="round-button" onclick={on_mute_toggle}>
                            <Icon name={if *muted { "RiVolumeMuteFill" } else { "RiVolumeUpFill" }} />
                        </button>
                    </div>
                    <span class="badge video-badge">
                        <Icon name="RiPlayFill" />
                        {"Video"}
                    </span>
                } else if let Some(image) = item.image.as_ref() {
                    <img src={image.src.clone()} alt={item.image_alt()} class="video-media" loading="lazy" />
                }
            </div>
            if let Some(label) = item.label.as_ref() {
                <div class="video-label"><span class="badge">{label}</span></div>
            }
            <div class="video-title">{item.title.clone().unwrap_or_default()}</div>
            <div class="video-description">{item.description.clone().unwrap_or_default()}</div>
        </div>
    }
}

#[function_component]
pub fn Showcase(props: &SectionProps) -> Html {
    let section = &props.section;
    let len = section.items.len();
    let slides = use_reducer(move || Slides::new(len, false));

    {
        let dispatcher = slides.dispatcher();
        use_effect_with(len, move |len| {
            dispatcher.dispatch(SlideAction::Reset(*len));
            || ()
        });
    }

    if section.disabled {
        return html! {};
    }

    let on_prev = {
        let slides = slides.clone();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Prev))
    };
    let on_next = {
        let slides = slides.clone();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Next))
    };

    html! {
        <section id={section.name.clone()} class="showcase">
            <style>{STYLE}</style>
            <div class="container showcase-header">
                <div>
                    <h2>{section.title.clone().unwrap_or_default()}</h2>
                    if let Some(description) = section.description.as_ref() {
                        <p class="showcase-description">{description}</p>
                    }
                </div>
                <div class="showcase-controls">
                    <button type="button" class="ghost-button" onclick={on_prev} disabled={!slides.can_prev()} aria-label="Previous">
                        <Icon name="RiArrowLeftLine" />
                    </button>
                    <button type="button" class="ghost-button" onclick={on_next} disabled={!slides.can_next()} aria-label="Next">
                        <Icon name="RiArrowRightLine" />
                    </button>
                </div>
            </div>
            <div class="showcase-viewport">
                <div class="container showcase-track" style={format!("--active: {};", slides.active)}>
                    { for section.items.iter().map(|item| html! {
                        <div class="showcase-slide">
                            <VideoCard item={item.clone()} />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::landing::{Image, Section};

    #[tokio::test]
    async fn cards_use_video_when_present_and_image_otherwise() {
        let html = yew::ServerRenderer::<Showcase>::with_props(|| SectionProps {
            section: Section {
                title: Some("Made With Seedance 2.0".into()),
                items: vec![
                    SectionItem {
                        title: Some("Pop".into()),
                        image: Some(Image { src: "/imgs/pop.jpg".into(), alt: None }),
                        video_url: Some("/videos/pop.mp4".into()),
                        ..Default::default()
                    },
                    SectionItem {
                        title: Some("Wildlife".into()),
                        image: Some(Image { src: "/imgs/wildlife.jpg".into(), alt: None }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        })
        .hydratable(false)
        .render()
        .await;
        assert_eq!(html.matches("<video").count(), 1);
        assert!(html.contains("playsinline"));
        assert!(!html.contains(r#"playsinline="true""#));
        assert!(html.contains(r#"poster="/imgs/pop.jpg""#));
        assert!(html.contains(r#"alt="Wildlife""#));
        // Starts on the first slide, so only "next" is enabled.
        assert!(html.contains("--active: 0;"));
        assert!(html.contains(r#"aria-label="Previous" disabled="disabled""#));
        assert!(!html.contains(r#"aria-label="Next" disabled"#));
        assert_eq!(html.matches(r#"disabled="disabled""#).count(), 1);
    }
}
