/// Box in viewport coordinates, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Scroll position and sizes of the page at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            height,
            document_height,
        }
    }

    pub fn total_scrollable(&self) -> f64 {
        self.document_height - self.height
    }
}

/// Read-only access to the rendered page.
///
/// Everything the scroll engine knows about layout goes through this trait, so the
/// interval and hysteresis logic can run against synthetic geometry.
pub trait LayoutProbe {
    fn viewport(&self) -> Viewport;

    /// Rendered height of the element with DOM id `id`, if it exists.
    fn element_height(&self, id: &str) -> Option<f64>;

    /// Bounding box of the element with DOM id `id`, if it exists.
    fn element_box(&self, id: &str) -> Option<Rect>;

    /// Horizontal scroll offset of a scrollable element.
    fn element_scroll_left(&self, id: &str) -> Option<f64>;
}
