use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{
    layout::{LayoutProbe, Rect, Viewport},
    schedule::{Callback, ScheduleError, Scheduler},
};

/// Reads layout from the live document. Must only be used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomProbe;

impl DomProbe {
    fn element(&self, id: &str) -> Option<web_sys::Element> {
        document().get_element_by_id(id)
    }
}

impl LayoutProbe for DomProbe {
    fn viewport(&self) -> Viewport {
        let window = window();
        let scroll_y = window.scroll_y().unwrap_or_default();
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        Viewport::new(scroll_y, height, document_height)
    }

    fn element_height(&self, id: &str) -> Option<f64> {
        let el = self.element(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(el.offset_height() as f64)
    }

    fn element_box(&self, id: &str) -> Option<Rect> {
        let r = self.element(id)?.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }

    fn element_scroll_left(&self, id: &str) -> Option<f64> {
        Some(self.element(id)?.scroll_left() as f64)
    }
}

/// Smooth-scrolls element `id` horizontally to `left`.
pub fn scroll_element_to(id: &str, left: f64) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scrolls the window to document offset `top`.
pub fn scroll_window_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Replaces the URL fragment without adding a history entry.
pub fn replace_hash(id: &str) {
    let Ok(history) = window().history() else {
        return;
    };
    if let Err(err) =
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("#{id}")))
    {
        log::warn!("couldn't replace location hash: {err:?}");
    }
}

/// Sets `overflow` on `<body>`, returning the previous value.
pub fn set_body_overflow(value: &str) -> Option<String> {
    let style = document().body()?.style();
    let prev = style.get_property_value("overflow").ok();
    if let Err(err) = style.set_property("overflow", value) {
        log::warn!("couldn't set body overflow: {err:?}");
    }
    prev
}

/// Schedules work with `requestAnimationFrame` and `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Frame = AnimationFrameRequestHandle;
    type Timer = TimeoutHandle;

    fn request_frame(&self, callback: Callback) -> Result<Self::Frame, ScheduleError> {
        request_animation_frame_with_handle(callback)
            .map_err(|err| ScheduleError::Frame(format!("{err:?}")))
    }

    fn cancel_frame(&self, frame: Self::Frame) {
        frame.cancel();
    }

    fn set_timer(&self, delay: Duration, callback: Callback) -> Result<Self::Timer, ScheduleError> {
        set_timeout_with_handle(callback, delay)
            .map_err(|err| ScheduleError::Timer(format!("{err:?}")))
    }

    fn clear_timer(&self, timer: Self::Timer) {
        timer.clear();
    }
}
