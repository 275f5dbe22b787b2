//! Every DOM side effect lives here, behind `cfg(target_arch = "wasm32")`,
//! with inert native fallbacks so the crate (and its tests) build off-wasm.
//!
//! Policy (matches the rest of the site): a browser call that fails leaves
//! the harmless default state; nothing here surfaces an error to the user.

/// Vertical scroll offset (px) past which the header takes its "scrolled" style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of a `[data-reveal]` element that must intersect the viewport
/// before it is shown.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Id of the content container whose `loaded` class drives the mount fade.
pub const PAGE_SHELL_ID: &str = "page-shell";

/// Id of the site header toggled by the scroll listener.
pub const HEADER_ID: &str = "site-header";

/// Id of the home hero video element.
pub const HERO_VIDEO_ID: &str = "hero-video";

/// The hero clip restarts once playback reaches this offset (seconds),
/// deliberately short of the full clip.
pub const HERO_VIDEO_MAX_OFFSET: f64 = 24.0;

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{HEADER_ID, HEADER_SCROLL_THRESHOLD, PAGE_SHELL_ID, REVEAL_THRESHOLD};

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn storage_get(key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    pub fn storage_set(key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn set_document_language(lang: &str, dir: &str) {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("lang", lang);
            let _ = root.set_attribute("dir", dir);
        }
    }

    pub fn scroll_to_top() {
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn scroll_to_anchor(id: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.scroll_into_view();
        }
    }

    pub fn shell_set_loaded(loaded: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(PAGE_SHELL_ID)) {
            let list = el.class_list();
            let _ = if loaded {
                list.add_1("loaded")
            } else {
                list.remove_1("loaded")
            };
        }
    }

    /// Observe every `[data-reveal]` element currently in the DOM. Called
    /// again after each page replacement; the previous observer only held
    /// discarded nodes, so it is simply abandoned.
    pub fn arm_reveal_observer() {
        let Some(doc) = document() else { return };
        let Ok(nodes) = doc.query_selector_all("[data-reveal]") else {
            return;
        };
        if nodes.length() == 0 {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("is-visible");
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };

        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                    observer.observe(&el);
                }
            }
        }

        // The closure must outlive the observer; both last until navigation
        // discards the observed nodes.
        callback.forget();
    }

    /// Armed once at app mount; toggles the header's scrolled style.
    pub fn arm_header_scroll_listener() {
        let Some(win) = web_sys::window() else { return };

        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(win) = web_sys::window() else { return };
            let scrolled = win.scroll_y().unwrap_or(0.0) > HEADER_SCROLL_THRESHOLD;
            if let Some(header) = win
                .document()
                .and_then(|d| d.get_element_by_id(HEADER_ID))
            {
                let list = header.class_list();
                let _ = if scrolled {
                    list.add_1("navbar--scrolled")
                } else {
                    list.remove_1("navbar--scrolled")
                };
            }
        });

        let _ = win.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    }

    fn video_element(id: &str) -> Option<web_sys::HtmlVideoElement> {
        document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlVideoElement>()
            .ok()
    }

    /// Try to start playback. Returns whether the video is actually playing;
    /// an autoplay rejection resolves to `false` rather than an error.
    pub async fn video_play(id: &str) -> bool {
        let Some(video) = video_element(id) else {
            return false;
        };
        match video.play() {
            Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
            Err(_) => false,
        }
    }

    pub fn video_pause(id: &str) {
        if let Some(video) = video_element(id) {
            let _ = video.pause();
        }
    }

    pub fn video_set_muted(id: &str, muted: bool) {
        if let Some(video) = video_element(id) {
            video.set_muted(muted);
        }
    }

    /// Restart the clip whenever playback reaches `max_offset` seconds.
    pub fn arm_video_loop(id: &str, max_offset: f64) {
        let Some(video) = video_element(id) else { return };
        let target = video.clone();

        let callback = Closure::<dyn FnMut()>::new(move || {
            if target.current_time() >= max_offset {
                target.set_current_time(0.0);
            }
        });

        let _ = video
            .add_event_listener_with_callback("timeupdate", callback.as_ref().unchecked_ref());
        callback.forget();
    }

    /// Blocking acknowledgment dialog: the explicit stand-in for the form
    /// submission backends that live outside this repository.
    pub fn acknowledge(message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    pub fn log(message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    /// Clear an input that cannot be value-bound (the resume file field).
    pub fn reset_input(id: &str) {
        if let Some(input) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    //! Inert native fallbacks: the site only ever runs in a browser, but
    //! unit tests build and exercise the pure logic on the host.

    pub fn storage_get(_key: &str) -> Option<String> {
        None
    }

    pub fn storage_set(_key: &str, _value: &str) {}

    pub fn set_document_language(_lang: &str, _dir: &str) {}

    pub fn scroll_to_top() {}

    pub fn scroll_to_anchor(_id: &str) {}

    pub fn shell_set_loaded(_loaded: bool) {}

    pub fn arm_reveal_observer() {}

    pub fn arm_header_scroll_listener() {}

    pub async fn video_play(_id: &str) -> bool {
        false
    }

    pub fn video_pause(_id: &str) {}

    pub fn video_set_muted(_id: &str, _muted: bool) {}

    pub fn arm_video_loop(_id: &str, _max_offset: f64) {}

    pub fn acknowledge(message: &str) {
        println!("[ack] {message}");
    }

    pub fn log(message: &str) {
        println!("{message}");
    }

    pub fn reset_input(_id: &str) {}
}

pub use imp::*;
