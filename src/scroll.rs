//! Scroll-driven navigation state.
//!
//! [`SectionRegistry`] measures the page's sections into intervals, [`ScrollTracker`]
//! derives reading progress and the active section from the scroll position, and
//! [`NavPillPositioner`] keeps the nav highlight under the active link. [`ScrollDriver`]
//! ties them to a [`Scheduler`] so recomputation happens at most once per frame.
//!
//! Layout is read through [`LayoutProbe`]; [`browser`] provides the DOM-backed
//! implementations.

pub mod browser;
mod config;
mod driver;
mod layout;
mod pill;
mod registry;
mod schedule;
mod tracker;

pub use config::{ConfigError, ScrollConfig};
pub use driver::ScrollDriver;
pub use layout::{LayoutProbe, Rect, Viewport};
pub use pill::{
    jump_offset, nav_item_dom_id, nav_visible, NavPillGeometry, NavPillPositioner, PillPlacement,
};
pub use registry::{Section, SectionInterval, SectionRegistry};
pub use schedule::{Callback, ScheduleError, Scheduler};
pub use tracker::{progress_fraction, ScrollState, ScrollTracker};

pub type BrowserDriver = ScrollDriver<browser::BrowserScheduler, browser::DomProbe>;
