use leptos::prelude::*;

use super::tracking::use_scroll_tracking;
use crate::content::SECTIONS;

/// Reading progress: a vertical bar with section labels on wide screens, a thin top bar
/// on compact ones.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let tracking = use_scroll_tracking();
    let progress = tracking.progress();
    let active = tracking.active();

    view! {
        <div class="hidden md:flex fixed left-8 top-1/2 -translate-y-1/2 z-40 gap-6">
            <div class="relative w-[2px] h-[70vh] bg-slate-700/60 rounded-full overflow-hidden">
                <div
                    class="absolute inset-0 bg-teal-400 origin-top transition-transform duration-200 ease-out"
                    style:transform=move || format!("scaleY({})", progress.get())
                ></div>
            </div>
            <ul class="flex flex-col justify-between h-[70vh] text-xs tracking-widest">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        let is_active = move || active.get() == Some(id);
                        view! {
                            <li class=move || {
                                if is_active() {
                                    "flex items-center gap-3 transition-colors text-teal-400"
                                } else {
                                    "flex items-center gap-3 transition-colors text-slate-500"
                                }
                            }>
                                <span class=move || {
                                    if is_active() {
                                        "w-2 h-2 rounded-full transition-transform bg-teal-400 scale-125"
                                    } else {
                                        "w-2 h-2 rounded-full transition-transform bg-slate-500"
                                    }
                                }></span>
                                {section.label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>

        <div class="md:hidden fixed top-0 left-0 right-0 z-50 pointer-events-none">
            <div class="bg-slate-950/70 backdrop-blur-md px-4 pt-2 pb-2">
                <div class="relative h-[3px] w-full bg-slate-700/60 rounded-full overflow-hidden">
                    <div
                        class="absolute left-0 top-0 h-full bg-teal-400"
                        style:width=move || format!("{}%", progress.get() * 100.0)
                    ></div>
                </div>
            </div>
            <div class="h-[44px]"></div>
        </div>
    }
}
