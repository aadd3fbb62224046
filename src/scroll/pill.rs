use super::layout::{LayoutProbe, Rect};

const COMPACT_HEADER_OFFSET: f64 = 120.0;
const WIDE_HEADER_OFFSET: f64 = 90.0;

/// Geometry of the sliding highlight, relative to the nav track's content box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavPillGeometry {
    pub offset_left: f64,
    pub width: f64,
}

/// Result of a successful reposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillPlacement {
    pub geometry: NavPillGeometry,
    /// Horizontal scroll offset that centers the active item in the track.
    pub scroll_left: f64,
}

/// DOM id of the nav link for section `section_id`.
pub fn nav_item_dom_id(section_id: &str) -> String {
    format!("nav-{section_id}")
}

/// Keeps the highlight under the active navigation link.
#[derive(Debug, Clone)]
pub struct NavPillPositioner {
    track_id: &'static str,
    geometry: NavPillGeometry,
}

impl NavPillPositioner {
    pub fn new(track_id: &'static str) -> Self {
        Self {
            track_id,
            geometry: NavPillGeometry::default(),
        }
    }

    pub fn geometry(&self) -> NavPillGeometry {
        self.geometry
    }

    /// Measures the link for `active_id` and moves the pill under it.
    ///
    /// When either the track or the link cannot be measured the previous geometry is
    /// kept and `None` is returned.
    pub fn reposition(
        &mut self,
        active_id: &'static str,
        probe: &impl LayoutProbe,
    ) -> Option<PillPlacement> {
        let track = probe.element_box(self.track_id)?;
        let item = probe.element_box(&nav_item_dom_id(active_id))?;
        let track_scroll = probe
            .element_scroll_left(self.track_id)
            .filter(|v| v.is_finite())
            .unwrap_or_default();
        if !track.is_finite() || !item.is_finite() {
            return None;
        }

        let geometry = NavPillGeometry {
            offset_left: item.left - track.left + track_scroll,
            width: item.width,
        };
        let scroll_left =
            (geometry.offset_left - track.width / 2.0 + geometry.width / 2.0).max(0.0);

        self.geometry = geometry;
        Some(PillPlacement {
            geometry,
            scroll_left,
        })
    }
}

/// Whether the floating nav should show: hidden while the intro is on screen.
pub fn nav_visible(intro: Option<Rect>, viewport_height: f64) -> bool {
    match intro {
        Some(r) => !(r.bottom() > 0.0 && r.top < viewport_height),
        None => true,
    }
}

/// Document offset to scroll to when a nav link for an element at `element_top`
/// (viewport coordinates) is clicked. Leaves room for the fixed header.
pub fn jump_offset(element_top: f64, scroll_y: f64, compact: bool) -> f64 {
    let header = if compact {
        COMPACT_HEADER_OFFSET
    } else {
        WIDE_HEADER_OFFSET
    };
    (element_top + scroll_y - header).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::layout::testing::FakePage;

    const TRACK: &str = "nav-track";

    fn nav_page() -> FakePage {
        let page = FakePage::default();
        page.set_box(TRACK, Rect::new(100.0, 24.0, 400.0, 48.0));
        page.set_box("nav-skills", Rect::new(110.0, 30.0, 80.0, 36.0));
        page.set_box("nav-problem", Rect::new(200.0, 30.0, 140.0, 36.0));
        page.set_box("nav-projects", Rect::new(350.0, 30.0, 90.0, 36.0));
        page
    }

    #[test]
    fn test_reposition_measures_relative_to_track() {
        let page = nav_page();
        let mut pill = NavPillPositioner::new(TRACK);

        let placed = pill.reposition("problem", &page).unwrap();
        assert_eq!(
            placed.geometry,
            NavPillGeometry {
                offset_left: 100.0,
                width: 140.0
            }
        );
        assert_eq!(pill.geometry(), placed.geometry);
    }

    #[test]
    fn test_reposition_centers_item() {
        let page = nav_page();
        let mut pill = NavPillPositioner::new(TRACK);

        // offset 250, width 90 -> center at 295, track half width 200
        let placed = pill.reposition("projects", &page).unwrap();
        assert_eq!(placed.scroll_left, 95.0);

        // items near the start cannot scroll before 0
        let placed = pill.reposition("skills", &page).unwrap();
        assert_eq!(placed.scroll_left, 0.0);
    }

    #[test]
    fn test_reposition_accounts_for_track_scroll() {
        let page = nav_page();
        page.scroll_left.borrow_mut().insert(TRACK.to_string(), 40.0);
        let mut pill = NavPillPositioner::new(TRACK);

        let placed = pill.reposition("problem", &page).unwrap();
        assert_eq!(placed.geometry.offset_left, 140.0);
    }

    #[test]
    fn test_missing_item_keeps_geometry() {
        let page = nav_page();
        let mut pill = NavPillPositioner::new(TRACK);
        let before = pill.reposition("skills", &page).unwrap().geometry;

        assert!(pill.reposition("intro", &page).is_none());
        assert_eq!(pill.geometry(), before);
    }

    #[test]
    fn test_missing_track_keeps_geometry() {
        let page = nav_page();
        let mut pill = NavPillPositioner::new("elsewhere");
        assert!(pill.reposition("skills", &page).is_none());
        assert_eq!(pill.geometry(), NavPillGeometry::default());
    }

    #[test]
    fn test_non_finite_box_is_ignored() {
        let page = nav_page();
        let mut pill = NavPillPositioner::new(TRACK);
        let before = pill.reposition("skills", &page).unwrap().geometry;

        page.set_box("nav-problem", Rect::new(f64::NAN, 30.0, 140.0, 36.0));
        assert!(pill.reposition("problem", &page).is_none());
        assert_eq!(pill.geometry(), before);
        assert!(!pill.geometry().offset_left.is_nan());
    }

    #[test]
    fn test_nav_visible() {
        // intro fully on screen
        assert!(!nav_visible(Some(Rect::new(0.0, 0.0, 1200.0, 900.0)), 900.0));
        // intro partially scrolled off
        assert!(!nav_visible(Some(Rect::new(0.0, -800.0, 1200.0, 900.0)), 900.0));
        // intro gone above the viewport
        assert!(nav_visible(Some(Rect::new(0.0, -900.0, 1200.0, 900.0)), 900.0));
        assert!(nav_visible(None, 900.0));
    }

    #[test]
    fn test_jump_offset() {
        assert_eq!(jump_offset(500.0, 1000.0, false), 1410.0);
        assert_eq!(jump_offset(500.0, 1000.0, true), 1380.0);
        assert_eq!(jump_offset(20.0, 0.0, false), 0.0);
    }
}
