use super::{
    config::ScrollConfig,
    layout::{LayoutProbe, Viewport},
    registry::{Section, SectionRegistry},
};

/// Derived scroll state published to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// 0 at the top of the document, 1 at the maximum scroll offset.
    pub progress: f64,
    /// Section currently judged in view. `None` until the anchor first lands inside a
    /// measured section; after that it only changes to another measured section.
    pub active: Option<&'static str>,
}

/// Normalized scroll completion, clamped to `[0, 1]`.
pub fn progress_fraction(viewport: &Viewport) -> f64 {
    let total = viewport.total_scrollable();
    if !(total > 0.0) {
        return 0.0;
    }
    let ratio = viewport.scroll_y / total;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Turns scroll positions into a [`ScrollState`].
///
/// The active section is picked at an anchor `K` of the viewport height below the top of
/// the viewport. Once a section is active it stays active while the anchor is within a
/// small buffer of its edges, so an anchor sitting on a boundary does not flicker between
/// the two neighbours.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    registry: SectionRegistry,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(sections: &'static [Section], config: ScrollConfig) -> Self {
        Self {
            config,
            registry: SectionRegistry::new(sections),
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn recalculate(&mut self, probe: &impl LayoutProbe) {
        self.registry.recalculate(probe);
    }

    /// Recomputes the state for `viewport`. Returns whether anything changed.
    pub fn update(&mut self, viewport: Viewport) -> bool {
        let next = ScrollState {
            progress: progress_fraction(&viewport),
            active: self.resolve_active(&viewport),
        };
        if next.active != self.state.active {
            log::debug!("active section {:?} -> {:?}", self.state.active, next.active);
        }
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Active section for `viewport`, given the currently active one.
    pub fn resolve_active(&self, viewport: &Viewport) -> Option<&'static str> {
        let anchor = self.config.anchor_y(viewport.scroll_y, viewport.height);
        let Some(candidate) = self.registry.lookup(anchor) else {
            return self.state.active;
        };
        let Some(prev) = self.state.active else {
            return Some(candidate.id);
        };
        if prev == candidate.id {
            return Some(prev);
        }
        let buffer = self.config.buffer(viewport.height);
        match self.registry.interval(prev) {
            Some(held) if anchor >= held.start - buffer && anchor < held.end + buffer => Some(prev),
            _ => Some(candidate.id),
        }
    }

    /// Makes `id` active immediately, e.g. after a navigation click.
    ///
    /// Returns false for ids without a measured interval, so a section that is not
    /// rendered never becomes active.
    pub fn force_active(&mut self, id: &str) -> bool {
        let Some(interval) = self.registry.interval(id) else {
            return false;
        };
        self.state.active = Some(interval.id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::layout::testing::FakePage;

    static SECTIONS: &[Section] = &[
        Section {
            id: "intro",
            label: "Intro",
        },
        Section {
            id: "skills",
            label: "Skills",
        },
        Section {
            id: "experience",
            label: "Experience",
        },
        Section {
            id: "projects",
            label: "Projects",
        },
    ];

    const VIEWPORT_HEIGHT: f64 = 1000.0;

    fn page() -> FakePage {
        FakePage::with_sections(
            &[
                ("intro", 800.0),
                ("skills", 800.0),
                ("experience", 800.0),
                ("projects", 800.0),
            ],
            VIEWPORT_HEIGHT,
        )
    }

    fn tracker(page: &FakePage) -> ScrollTracker {
        let mut tracker = ScrollTracker::new(SECTIONS, ScrollConfig::default());
        tracker.recalculate(page);
        tracker
    }

    fn at(scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, VIEWPORT_HEIGHT, 4200.0)
    }

    /// Scroll offset that puts the anchor at `anchor_y`.
    fn anchor_at(anchor_y: f64) -> Viewport {
        at(anchor_y - VIEWPORT_HEIGHT * 0.3)
    }

    #[test]
    fn test_progress_bounds() {
        let viewport = at(0.0);
        let total = viewport.total_scrollable();
        assert_eq!(total, 3200.0);

        let mut s = 0.0;
        while s <= total {
            let p = progress_fraction(&at(s));
            assert!((0.0..=1.0).contains(&p), "progress {p} at {s}");
            s += 37.0;
        }
        assert_eq!(progress_fraction(&at(0.0)), 0.0);
        assert_eq!(progress_fraction(&at(total)), 1.0);
        assert_eq!(progress_fraction(&at(1600.0)), 0.5);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        assert_eq!(progress_fraction(&at(-60.0)), 0.0);
        assert_eq!(progress_fraction(&at(3400.0)), 1.0);
    }

    #[test]
    fn test_progress_degenerate_document() {
        for scroll_y in [0.0, 10.0, 500.0, -5.0] {
            assert_eq!(progress_fraction(&Viewport::new(scroll_y, 1000.0, 1000.0)), 0.0);
            assert_eq!(progress_fraction(&Viewport::new(scroll_y, 1000.0, 600.0)), 0.0);
        }
        assert_eq!(progress_fraction(&Viewport::new(10.0, f64::NAN, 600.0)), 0.0);
    }

    #[test]
    fn test_reference_scenario() {
        let page = page();

        let mut t = tracker(&page);
        t.update(at(0.0));
        assert_eq!(t.state().active, Some("intro"));

        let mut t = tracker(&page);
        t.update(at(1400.0));
        assert_eq!(t.state().active, Some("experience"));

        let mut t = tracker(&page);
        t.update(at(3000.0));
        assert_eq!(t.state().active, Some("projects"));
    }

    #[test]
    fn test_sequential_scroll_through_page() {
        let page = page();
        let mut t = tracker(&page);
        for (scroll_y, expected) in [
            (0.0, "intro"),
            (1400.0, "experience"),
            (3000.0, "projects"),
            (900.0, "skills"),
            (0.0, "intro"),
        ] {
            t.update(at(scroll_y));
            assert_eq!(t.state().active, Some(expected), "at {scroll_y}");
        }
    }

    #[test]
    fn test_anchor_inside_interval() {
        let page = page();
        let mut t = tracker(&page);
        for (anchor, expected) in [
            (400.0, "intro"),
            (1200.0, "skills"),
            (2000.0, "experience"),
            (2800.0, "projects"),
        ] {
            t.update(anchor_at(anchor));
            assert_eq!(t.state().active, Some(expected), "anchor {anchor}");
        }
    }

    #[test]
    fn test_hysteresis_suppresses_flicker() {
        let page = page();
        let mut t = tracker(&page);
        t.update(anchor_at(400.0));
        assert_eq!(t.state().active, Some("intro"));

        for _ in 0..20 {
            t.update(anchor_at(795.0));
            assert_eq!(t.state().active, Some("intro"));
            t.update(anchor_at(805.0));
            assert_eq!(t.state().active, Some("intro"));
        }

        // leaving the buffer commits the switch
        t.update(anchor_at(900.0));
        assert_eq!(t.state().active, Some("skills"));

        // and the new section is held on the way back
        t.update(anchor_at(790.0));
        assert_eq!(t.state().active, Some("skills"));
        t.update(anchor_at(700.0));
        assert_eq!(t.state().active, Some("intro"));
    }

    #[test]
    fn test_fast_jump_to_non_adjacent_section() {
        let page = page();
        let mut t = tracker(&page);
        t.update(at(0.0));
        t.update(anchor_at(2900.0));
        assert_eq!(t.state().active, Some("projects"));
        t.update(anchor_at(100.0));
        assert_eq!(t.state().active, Some("intro"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let page = page();
        let mut t = tracker(&page);
        assert!(t.update(at(1234.0)));
        let first = t.state();
        assert!(!t.update(at(1234.0)));
        assert_eq!(t.state(), first);
    }

    #[test]
    fn test_end_of_document_resolves_to_last() {
        let page = page();
        let mut t = tracker(&page);
        t.update(anchor_at(3199.0));
        assert_eq!(t.state().active, Some("projects"));
        t.update(anchor_at(5000.0));
        assert_eq!(t.state().active, Some("projects"));

        let mut fresh = tracker(&page);
        fresh.update(anchor_at(5000.0));
        assert_eq!(fresh.state().active, Some("projects"));
    }

    #[test]
    fn test_no_intervals_keeps_active_unset() {
        let mut t = ScrollTracker::new(SECTIONS, ScrollConfig::default());
        t.update(at(1600.0));
        assert_eq!(t.state().active, None);
        assert_eq!(t.state().progress, 0.5);
    }

    #[test]
    fn test_no_match_retains_previous() {
        let page = page();
        let mut t = tracker(&page);
        t.update(at(1400.0));
        assert_eq!(t.state().active, Some("experience"));
        // rubber-band above the top pushes the anchor before the first interval
        t.update(at(-400.0));
        assert_eq!(t.state().active, Some("experience"));
        assert_eq!(t.state().progress, 0.0);
    }

    #[test]
    fn test_missing_section_never_active() {
        let page = page();
        page.heights.borrow_mut().remove("skills");
        let mut t = tracker(&page);
        for scroll_y in (0..3000).step_by(50) {
            t.update(at(scroll_y as f64));
            assert_ne!(t.state().active, Some("skills"));
        }
    }

    #[test]
    fn test_remeasure_drops_hysteresis_for_vanished_section() {
        let page = page();
        let mut t = tracker(&page);
        t.update(anchor_at(795.0));
        assert_eq!(t.state().active, Some("intro"));

        page.heights.borrow_mut().remove("intro");
        t.recalculate(&page);
        t.update(anchor_at(795.0));
        assert_eq!(t.state().active, Some("skills"));
    }

    #[test]
    fn test_force_active() {
        let page = page();
        let mut t = tracker(&page);
        t.update(at(0.0));
        assert!(t.force_active("projects"));
        assert_eq!(t.state().active, Some("projects"));
        assert!(!t.force_active("contact"));
        assert_eq!(t.state().active, Some("projects"));
    }

    #[test]
    fn test_force_active_ignores_unmeasured_section() {
        let page =
            FakePage::with_sections(&[("intro", 800.0), ("projects", 800.0)], VIEWPORT_HEIGHT);
        let mut t = tracker(&page);
        t.update(at(0.0));
        assert_eq!(t.state().active, Some("intro"));

        // configured, but not in the page
        assert!(!t.force_active("skills"));
        assert_eq!(t.state().active, Some("intro"));

        page.set_height("skills", 400.0);
        t.recalculate(&page);
        assert!(t.force_active("skills"));
        assert_eq!(t.state().active, Some("skills"));
    }

    #[test]
    fn test_anchor_above_first_section_leaves_active_unset() {
        let page = page();
        let mut t = tracker(&page);
        // rubber-band at creation puts the anchor before the first interval
        t.update(at(-400.0));
        assert_eq!(t.state().active, None);
        t.update(at(0.0));
        assert_eq!(t.state().active, Some("intro"));
    }
}
