use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use crate::scroll::{
    browser::{BrowserScheduler, DomProbe},
    BrowserDriver, ScrollConfig, ScrollDriver, ScrollState, Section,
};

/// Handle to the page's scroll state, shared through context.
///
/// Consumers only read; the driver owned here is the single writer.
#[derive(Clone, Copy)]
pub struct ScrollTracking {
    progress: Memo<f64>,
    active: Memo<Option<&'static str>>,
    driver: StoredValue<Option<BrowserDriver>, LocalStorage>,
}

impl ScrollTracking {
    pub fn progress(&self) -> Memo<f64> {
        self.progress
    }

    pub fn active(&self) -> Memo<Option<&'static str>> {
        self.active
    }

    pub fn jump_to(&self, id: &str) {
        self.driver.with_value(|driver| {
            if let Some(driver) = driver {
                driver.jump_to(id);
            }
        });
    }
}

pub fn use_scroll_tracking() -> ScrollTracking {
    expect_context::<ScrollTracking>()
}

/// Starts tracking `sections` for the lifetime of the current owner.
pub fn provide_scroll_tracking(sections: &'static [Section]) -> ScrollTracking {
    let state = RwSignal::new(ScrollState::default());
    let driver = StoredValue::new_local(None::<BrowserDriver>);
    let tracking = ScrollTracking {
        progress: Memo::new(move |_| state.with(|s| s.progress)),
        active: Memo::new(move |_| state.with(|s| s.active)),
        driver,
    };

    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        let created = ScrollDriver::create(
            sections,
            ScrollConfig::default(),
            BrowserScheduler,
            DomProbe,
            move |next: &ScrollState| state.set(*next),
        );
        driver.set_value(Some(created));
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            driver.with_value(|driver| {
                if let Some(driver) = driver {
                    driver.on_scroll();
                }
            })
        },
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        driver.with_value(|driver| {
            if let Some(driver) = driver {
                driver.on_resize();
            }
        })
    });

    on_cleanup(move || {
        if let Some(Some(driver)) = driver.try_update_value(|driver| driver.take()) {
            driver.dispose();
        }
    });

    provide_context(tracking);
    tracking
}
