//! The home hero's background video: muted, autoplaying, restarting before
//! a fixed offset (loop-within-a-clip), with independent play/pause and
//! mute/unmute toggles. An autoplay rejection simply leaves the paused
//! state; it is never surfaced as an error.

use dioxus::prelude::*;

use crate::core::browser::{self, HERO_VIDEO_ID, HERO_VIDEO_MAX_OFFSET};
use crate::t;

const HERO_VIDEO_SRC: &str = "https://cdn.shamslevant.example/media/hero-plant-loop.mp4";
const HERO_POSTER_SRC: &str = "https://cdn.shamslevant.example/media/hero-plant-poster.jpg";

#[component]
pub fn HeroVideo() -> Element {
    let mut playing = use_signal(|| false);
    let mut muted = use_signal(|| true);

    let on_mounted = move |_| {
        browser::arm_video_loop(HERO_VIDEO_ID, HERO_VIDEO_MAX_OFFSET);
        spawn(async move {
            let started = browser::video_play(HERO_VIDEO_ID).await;
            playing.set(started);
        });
    };

    let toggle_play = move |_| {
        if playing() {
            browser::video_pause(HERO_VIDEO_ID);
            playing.set(false);
        } else {
            spawn(async move {
                let started = browser::video_play(HERO_VIDEO_ID).await;
                playing.set(started);
            });
        }
    };

    let toggle_mute = move |_| {
        let next = !muted();
        browser::video_set_muted(HERO_VIDEO_ID, next);
        muted.set(next);
    };

    rsx! {
        div { class: "hero-video",
            video {
                id: HERO_VIDEO_ID,
                class: "hero-video__media",
                src: HERO_VIDEO_SRC,
                poster: HERO_POSTER_SRC,
                muted: true,
                autoplay: true,
                playsinline: true,
                preload: "auto",
                onmounted: on_mounted,
            }
            div { class: "hero-video__controls",
                button {
                    r#type: "button",
                    class: "hero-video__control",
                    aria_label: if playing() { t!("video-pause") } else { t!("video-play") },
                    onclick: toggle_play,
                    if playing() { "❚❚" } else { "▶" }
                }
                button {
                    r#type: "button",
                    class: "hero-video__control",
                    aria_label: if muted() { t!("video-unmute") } else { t!("video-mute") },
                    onclick: toggle_mute,
                    if muted() { "🔇" } else { "🔊" }
                }
            }
        }
    }
}
