use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_media_query;

use super::tracking::use_scroll_tracking;
use crate::content::NAV_ITEMS;
use crate::scroll::{
    browser::{replace_hash, scroll_element_to, scroll_window_to, DomProbe},
    jump_offset, nav_item_dom_id, nav_visible, LayoutProbe, NavPillGeometry, NavPillPositioner,
};

const TRACK_ID: &str = "top-nav-track";
pub const COMPACT_QUERY: &str = "(max-width: 767px)";

#[component]
pub fn TopNav() -> impl IntoView {
    let tracking = use_scroll_tracking();
    let active = tracking.active();
    let progress = tracking.progress();
    let compact = use_media_query(COMPACT_QUERY);
    let (visible, set_visible) = signal(false);
    let (pill, set_pill) = signal(NavPillGeometry::default());
    let positioner = StoredValue::new(NavPillPositioner::new(TRACK_ID));

    // hide while the intro is on screen; re-checked on every published scroll frame
    Effect::new(move |_| {
        progress.track();
        let probe = DomProbe;
        set_visible(nav_visible(
            probe.element_box("intro"),
            probe.viewport().height,
        ));
    });

    // layout reads only when the active section changes
    Effect::new(move |_| {
        let Some(id) = active.get() else {
            return;
        };
        let placement = positioner
            .try_update_value(|p| p.reposition(id, &DomProbe))
            .flatten();
        if let Some(placement) = placement {
            set_pill(placement.geometry);
            scroll_element_to(TRACK_ID, placement.scroll_left);
        }
    });

    let jump = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        let probe = DomProbe;
        let Some(target) = probe.element_box(id) else {
            return;
        };
        let top = jump_offset(target.top, probe.viewport().scroll_y, compact.get_untracked());
        scroll_window_to(top);
        replace_hash(id);
        tracking.jump_to(id);
    };

    view! {
        <nav class=move || {
            let state = if visible.get() {
                "opacity-100 translate-y-0"
            } else {
                "opacity-0 -translate-y-3 pointer-events-none"
            };
            format!(
                "fixed left-1/2 -translate-x-1/2 z-50 transition-all duration-500 top-6 max-md:ml-[20px] {state}",
            )
        }>
            <div
                id=TRACK_ID
                class="relative flex items-center gap-1 md:gap-3 px-1.5 py-2 md:px-10 md:py-4 rounded-full bg-white/10 backdrop-blur-[28px] border border-white/5 shadow-[0_8px_28px_rgba(0,0,0,0.22)] max-w-[94vw] md:max-w-none overflow-x-auto whitespace-nowrap scrollbar-hide"
            >
                <span
                    class="pointer-events-none absolute top-1/2 -translate-y-1/2 rounded-full bg-slate-950 shadow-inner transition-all duration-300 ease-out h-8 md:h-12"
                    style:left=move || format!("{}px", pill.get().offset_left)
                    style:width=move || format!("{}px", pill.get().width)
                ></span>
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let id = item.section_id;
                        view! {
                            <a
                                id=nav_item_dom_id(id)
                                href=format!("#{id}")
                                on:click=move |ev| jump(ev, id)
                                class=move || {
                                    let tone = if active.get() == Some(id) {
                                        "text-white"
                                    } else {
                                        "text-slate-300 hover:text-white"
                                    };
                                    format!(
                                        "relative z-10 rounded-full px-2.5 py-2 md:px-7 md:py-2.5 text-[10px] md:text-base font-black md:font-extrabold tracking-normal transition-colors {tone}",
                                    )
                                }
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
