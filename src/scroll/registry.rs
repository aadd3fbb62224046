use super::layout::LayoutProbe;

/// A named region of the page. `id` matches the DOM anchor of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Vertical extent of a section in document coordinates, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionInterval {
    pub id: &'static str,
    pub start: f64,
    pub end: f64,
}

impl SectionInterval {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.start && y < self.end
    }
}

/// Measures the configured sections into contiguous intervals.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: &'static [Section],
    intervals: Vec<SectionInterval>,
}

impl SectionRegistry {
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            intervals: Vec::new(),
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// Replaces the intervals with a fresh measurement.
    ///
    /// Sections whose element is not rendered yet are skipped; the remaining ones are
    /// laid end to end starting at 0 in declaration order.
    pub fn recalculate(&mut self, probe: &impl LayoutProbe) -> &[SectionInterval] {
        let mut offset = 0.0;
        let mut next = Vec::with_capacity(self.sections.len());
        for section in self.sections {
            let Some(height) = probe.element_height(section.id) else {
                continue;
            };
            let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
            next.push(SectionInterval {
                id: section.id,
                start: offset,
                end: offset + height,
            });
            offset += height;
        }
        log::debug!(
            "measured {}/{} sections, {offset}px total",
            next.len(),
            self.sections.len()
        );
        self.intervals = next;
        &self.intervals
    }

    pub fn intervals(&self) -> &[SectionInterval] {
        &self.intervals
    }

    pub fn interval(&self, id: &str) -> Option<&SectionInterval> {
        self.intervals.iter().find(|i| i.id == id)
    }

    /// Returns the interval the anchor falls in, or the last one when the anchor is
    /// past the end of the measured content.
    pub fn lookup(&self, anchor_y: f64) -> Option<&SectionInterval> {
        self.intervals
            .iter()
            .find(|i| i.contains(anchor_y))
            .or_else(|| self.intervals.last().filter(|last| anchor_y >= last.start))
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

    fn page() -> FakePage {
        FakePage::with_sections(
            &[
                ("intro", 800.0),
                ("skills", 800.0),
                ("experience", 800.0),
                ("projects", 800.0),
            ],
            1000.0,
        )
    }

    #[test]
    fn test_intervals_are_contiguous() {
        let mut registry = SectionRegistry::new(SECTIONS);
        let intervals = registry.recalculate(&page()).to_vec();

        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals[0].start, 0.0);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let ids: Vec<_> = intervals.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["intro", "skills", "experience", "projects"]);
        assert_eq!(intervals[3].end, 3200.0);
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let page = page();
        page.heights.borrow_mut().remove("skills");
        let mut registry = SectionRegistry::new(SECTIONS);
        registry.recalculate(&page);

        let ids: Vec<_> = registry.intervals().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["intro", "experience", "projects"]);
        // no gap where the missing section would be
        let experience = registry.interval("experience").unwrap();
        assert_eq!(experience.start, 800.0);
        assert_eq!(experience.end, 1600.0);
        assert!(registry.interval("skills").is_none());
    }

    #[test]
    fn test_recalculate_replaces_intervals() {
        let page = page();
        let mut registry = SectionRegistry::new(SECTIONS);
        registry.recalculate(&page);
        page.set_height("intro", 500.0);
        registry.recalculate(&page);

        assert_eq!(registry.intervals().len(), 4);
        assert_eq!(registry.interval("intro").unwrap().end, 500.0);
        assert_eq!(registry.interval("projects").unwrap().end, 2900.0);
    }

    #[test]
    fn test_empty_page() {
        let mut registry = SectionRegistry::new(SECTIONS);
        assert!(registry.recalculate(&FakePage::default()).is_empty());
        assert!(registry.lookup(100.0).is_none());
    }

    #[test]
    fn test_lookup() {
        let mut registry = SectionRegistry::new(SECTIONS);
        registry.recalculate(&page());

        assert_eq!(registry.lookup(0.0).map(|i| i.id), Some("intro"));
        assert_eq!(registry.lookup(799.9).map(|i| i.id), Some("intro"));
        assert_eq!(registry.lookup(800.0).map(|i| i.id), Some("skills"));
        // past the end clamps to the last section
        assert_eq!(registry.lookup(9000.0).map(|i| i.id), Some("projects"));
        // before the start resolves to nothing
        assert!(registry.lookup(-10.0).is_none());
    }

    #[test]
    fn test_non_finite_height_counts_as_empty() {
        let page = page();
        page.set_height("skills", f64::NAN);
        let mut registry = SectionRegistry::new(SECTIONS);
        registry.recalculate(&page);

        let skills = registry.interval("skills").unwrap();
        assert_eq!(skills.start, skills.end);
        assert_eq!(registry.interval("experience").unwrap().start, 800.0);
    }
}
