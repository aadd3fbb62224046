use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{
    config::ScrollConfig,
    layout::LayoutProbe,
    registry::Section,
    schedule::Scheduler,
    tracker::{ScrollState, ScrollTracker},
};

struct Inner<S: Scheduler, P: LayoutProbe> {
    scheduler: S,
    probe: P,
    tracker: RefCell<ScrollTracker>,
    pending_frame: RefCell<Option<S::Frame>>,
    timers: RefCell<Vec<S::Timer>>,
    disposed: Cell<bool>,
    listener: Box<dyn Fn(&ScrollState)>,
}

impl<S: Scheduler, P: LayoutProbe> Inner<S, P> {
    fn refresh(&self) {
        if self.disposed.get() {
            return;
        }
        let viewport = self.probe.viewport();
        let state = {
            let Ok(mut tracker) = self.tracker.try_borrow_mut() else {
                return;
            };
            if !tracker.update(viewport) {
                return;
            }
            tracker.state()
        };
        (self.listener)(&state);
    }

    fn remeasure(&self) {
        if self.disposed.get() {
            return;
        }
        {
            let Ok(mut tracker) = self.tracker.try_borrow_mut() else {
                log::debug!("remeasure already in progress");
                return;
            };
            tracker.recalculate(&self.probe);
        }
        self.refresh();
    }

    fn frame(&self) {
        self.pending_frame.borrow_mut().take();
        self.refresh();
    }
}

/// Owns a [`ScrollTracker`] for the lifetime of a mounted view.
///
/// Host callbacks (frames, settle timers) only hold a weak reference, so anything that
/// fires after the driver is disposed or dropped does nothing.
pub struct ScrollDriver<S: Scheduler, P: LayoutProbe> {
    inner: Rc<Inner<S, P>>,
}

impl<S, P> ScrollDriver<S, P>
where
    S: Scheduler + 'static,
    P: LayoutProbe + 'static,
{
    /// Measures the page, publishes the first state and arms the settle timers.
    pub fn create(
        sections: &'static [Section],
        config: ScrollConfig,
        scheduler: S,
        probe: P,
        listener: impl Fn(&ScrollState) + 'static,
    ) -> Self {
        let settle_delays = config.settle_delays().to_vec();
        let inner = Rc::new(Inner {
            scheduler,
            probe,
            tracker: RefCell::new(ScrollTracker::new(sections, config)),
            pending_frame: RefCell::new(None),
            timers: RefCell::new(Vec::new()),
            disposed: Cell::new(false),
            listener: Box::new(listener),
        });
        inner.remeasure();

        for delay in settle_delays {
            let weak = Rc::downgrade(&inner);
            let timer = inner
                .scheduler
                .set_timer(delay, Box::new(move || with_live(&weak, |inner| inner.remeasure())));
            match timer {
                Ok(timer) => inner.timers.borrow_mut().push(timer),
                Err(err) => log::warn!("settle remeasure after {delay:?} skipped: {err}"),
            }
        }

        Self { inner }
    }

    /// Queues a recompute for the next frame. Calls while one is queued are coalesced.
    pub fn on_scroll(&self) {
        let inner = &self.inner;
        if inner.disposed.get() || inner.pending_frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(inner);
        match inner
            .scheduler
            .request_frame(Box::new(move || with_live(&weak, |inner| inner.frame())))
        {
            Ok(frame) => *inner.pending_frame.borrow_mut() = Some(frame),
            Err(err) => log::warn!("scroll update dropped: {err}"),
        }
    }

    pub fn on_resize(&self) {
        self.inner.remeasure();
    }
}

impl<S: Scheduler, P: LayoutProbe> ScrollDriver<S, P> {
    pub fn state(&self) -> ScrollState {
        self.inner.tracker.borrow().state()
    }

    /// Marks `id` active right away. Ids without a measured section are ignored.
    pub fn jump_to(&self, id: &str) -> bool {
        if self.inner.disposed.get() {
            return false;
        }
        let state = {
            let Ok(mut tracker) = self.inner.tracker.try_borrow_mut() else {
                return false;
            };
            if !tracker.force_active(id) {
                return false;
            }
            tracker.state()
        };
        (self.inner.listener)(&state);
        true
    }

    /// Releases the pending frame and timers. Safe to call more than once.
    pub fn dispose(&self) {
        let inner = &self.inner;
        if inner.disposed.replace(true) {
            return;
        }
        if let Some(frame) = inner.pending_frame.borrow_mut().take() {
            inner.scheduler.cancel_frame(frame);
        }
        for timer in inner.timers.borrow_mut().drain(..) {
            inner.scheduler.clear_timer(timer);
        }
        log::debug!("scroll driver disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

impl<S: Scheduler, P: LayoutProbe> Drop for ScrollDriver<S, P> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn with_live<S: Scheduler, P: LayoutProbe>(weak: &Weak<Inner<S, P>>, f: impl FnOnce(&Inner<S, P>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}
