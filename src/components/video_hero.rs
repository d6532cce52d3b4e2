use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::utils::playback::{transition, MediaCommand, PlaybackEvent, PlaybackState};

const VIDEO_ID: &str = "showcase-video";

impl Reducible for PlaybackState {
    type Action = PlaybackEvent;

    fn reduce(self: Rc<Self>, event: PlaybackEvent) -> Rc<Self> {
        Rc::new(transition(*self, event))
    }
}

fn video_element() -> Option<HtmlVideoElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(VIDEO_ID))
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
}

/// Product showcase band with a manually controlled video.
///
/// The play/pause control never assumes a command worked: it issues the
/// native call and waits for the element's own events to move the state
/// machine in `utils::playback`. Autoplay rejections are logged and leave
/// the control untouched.
#[function_component(VideoHero)]
pub fn video_hero() -> Html {
    let playback = use_reducer(PlaybackState::default);

    // Subscribe to the media element's lifecycle events
    {
        let playback = playback.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(video) = video_element() {
                    let on_loaded = Closure::<dyn Fn()>::new({
                        let playback = playback.clone();
                        move || playback.dispatch(PlaybackEvent::Loaded)
                    });
                    let on_play = Closure::<dyn Fn()>::new({
                        let playback = playback.clone();
                        move || playback.dispatch(PlaybackEvent::Play)
                    });
                    let on_pause = Closure::<dyn Fn()>::new({
                        let playback = playback.clone();
                        move || playback.dispatch(PlaybackEvent::Pause)
                    });
                    let on_ended = Closure::<dyn Fn()>::new({
                        let playback = playback.clone();
                        move || playback.dispatch(PlaybackEvent::Ended)
                    });
                    video
                        .add_event_listener_with_callback(
                            "loadeddata",
                            on_loaded.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    video
                        .add_event_listener_with_callback("play", on_play.as_ref().unchecked_ref())
                        .unwrap();
                    video
                        .add_event_listener_with_callback(
                            "pause",
                            on_pause.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    video
                        .add_event_listener_with_callback(
                            "ended",
                            on_ended.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Cached media can finish loading before we attach
                    if video.ready_state() >= HtmlMediaElement::HAVE_CURRENT_DATA {
                        playback.dispatch(PlaybackEvent::Loaded);
                    }
                    Box::new(move || {
                        let _ = video.remove_event_listener_with_callback(
                            "loadeddata",
                            on_loaded.as_ref().unchecked_ref(),
                        );
                        let _ = video.remove_event_listener_with_callback(
                            "play",
                            on_play.as_ref().unchecked_ref(),
                        );
                        let _ = video.remove_event_listener_with_callback(
                            "pause",
                            on_pause.as_ref().unchecked_ref(),
                        );
                        let _ = video.remove_event_listener_with_callback(
                            "ended",
                            on_ended.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_toggle = {
        let playback = playback.clone();
        Callback::from(move |_: MouseEvent| {
            let command = match playback.command() {
                Some(command) => command,
                None => return,
            };
            let video = match video_element() {
                Some(video) => video,
                None => return,
            };
            match command {
                MediaCommand::Play => match video.play() {
                    Ok(promise) => {
                        spawn_local(async move {
                            if let Err(err) = JsFuture::from(promise).await {
                                gloo_console::error!("Error toggling video playback:", err);
                            }
                        });
                    }
                    Err(err) => {
                        gloo_console::error!("Error toggling video playback:", err);
                    }
                },
                MediaCommand::Pause => {
                    if let Err(err) = video.pause() {
                        gloo_console::error!("Error toggling video playback:", err);
                    }
                }
            }
        })
    };

    let state = *playback;
    let video_css = r#"
    .video-hero {
        padding: 6rem 2rem;
    }
    .video-frame {
        position: relative;
        max-width: 1200px;
        margin: 0 auto;
        border-radius: 16px;
        overflow: hidden;
    }
    .showcase-video {
        display: block;
        width: 100%;
        height: 600px;
        object-fit: cover;
    }
    .video-scrim {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.3) 50%, transparent);
        pointer-events: none;
    }
    .video-control {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .play-toggle {
        width: 64px;
        height: 64px;
        border-radius: 50%;
        border: 2px solid white;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
        color: white;
        font-size: 1.3rem;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .play-toggle:hover:enabled {
        background: rgba(255, 255, 255, 0.2);
        transform: scale(1.1);
    }
    .play-toggle:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .video-caption {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 2rem;
        pointer-events: none;
    }
    .video-caption h2 {
        margin: 0 0 0.75rem 0;
        font-size: 1.9rem;
        color: white;
    }
    .video-caption p {
        margin: 0;
        max-width: 640px;
        color: rgba(255, 255, 255, 0.85);
    }
    @media (max-width: 768px) {
        .showcase-video {
            height: 380px;
        }
    }
    "#;

    html! {
        <section class="video-hero">
            <style>{video_css}</style>
            <div class="video-frame">
                <video
                    id={VIDEO_ID}
                    class="showcase-video"
                    poster={config::get_showcase_poster_url()}
                    loop=true
                    muted=true
                    playsinline=true
                >
                    <source src={config::get_showcase_video_url()} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
                <div class="video-scrim"></div>
                <div class="video-control">
                    <button
                        class="play-toggle"
                        onclick={on_toggle}
                        disabled={!state.can_toggle()}
                        aria-label={if state.is_playing() { "Pause video" } else { "Play video" }}
                    >
                        if state.is_playing() {
                            <i class="fas fa-pause"></i>
                        } else {
                            <i class="fas fa-play"></i>
                        }
                    </button>
                </div>
                <div class="video-caption">
                    <h2>{"Experience the Future of Business"}</h2>
                    <p>{"Watch how our platform transforms the way companies operate and grow in the digital age."}</p>
                </div>
            </div>
        </section>
    }
}
