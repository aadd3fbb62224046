use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_media_query};

use super::{nav::COMPACT_QUERY, projects::TechBox};
use crate::content::{GalleryState, Project, ProjectDetail, ProjectView};
use crate::scroll::browser::set_body_overflow;

const SCROLL_HINT_PX: i32 = 180;

/// Closes the modal on Escape and locks body scrolling while it is mounted.
fn use_modal_behavior(selected: RwSignal<Option<ProjectView>>) {
    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" {
            selected.set(None);
        }
    });

    let previous = Arc::new(Mutex::new(None::<String>));
    Effect::new({
        let previous = Arc::clone(&previous);
        move |_| {
            if let Ok(mut slot) = previous.lock() {
                *slot = set_body_overflow("hidden");
            }
        }
    });
    on_cleanup(move || {
        let restore = previous.lock().ok().and_then(|mut slot| slot.take());
        if let Some(value) = restore {
            set_body_overflow(&value);
        }
    });
}

#[component]
fn ModalFrame(
    title: &'static str,
    selected: RwSignal<Option<ProjectView>>,
    children: Children,
) -> impl IntoView {
    use_modal_behavior(selected);

    view! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
            role="dialog"
            aria-modal="true"
            on:click=move |_| selected.set(None)
        >
            <div
                class="relative w-full max-w-5xl max-h-[90vh] flex flex-col rounded-3xl border border-slate-800 bg-slate-950 shadow-[0_30px_80px_rgba(0,0,0,0.6)] overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <header class="flex items-center justify-between gap-4 px-6 md:px-8 py-5 border-b border-slate-800/70">
                    <h3 class="text-lg md:text-xl font-extrabold text-slate-100 truncate">
                        {title}
                    </h3>
                    <button
                        type="button"
                        aria-label="닫기"
                        on:click=move |_| selected.set(None)
                        class="h-9 w-9 shrink-0 rounded-full text-slate-400 hover:text-white hover:bg-slate-800 transition"
                    >
                        "✕"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPdfModal(
    project: &'static Project,
    url: &'static str,
    selected: RwSignal<Option<ProjectView>>,
) -> impl IntoView {
    let compact = use_media_query(COMPACT_QUERY);

    view! {
        <ModalFrame title=project.title selected>
            <Show
                when=move || compact.get()
                fallback=move || {
                    view! { <iframe src=url title=project.title class="w-full h-[75vh] bg-white"></iframe> }
                }
            >
                <div class="px-6 py-12 flex flex-col items-center gap-5 text-center">
                    <p class="text-sm text-slate-400">
                        "모바일에서는 PDF를 새 탭에서 확인할 수 있습니다."
                    </p>
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="h-11 inline-flex items-center px-6 rounded-full text-sm font-bold bg-teal-400 text-slate-950 hover:bg-teal-300 transition"
                    >
                        "PDF 열기"
                    </a>
                </div>
            </Show>
        </ModalFrame>
    }
}

#[component]
pub fn ProjectDetailModal(
    project: &'static Project,
    detail: Option<&'static ProjectDetail>,
    gallery: RwSignal<GalleryState>,
    selected: RwSignal<Option<ProjectView>>,
) -> impl IntoView {
    let detail = detail.copied().unwrap_or_default();
    let (hint, set_hint) = signal(true);
    let intro = detail.intro.or((!project.role.is_empty()).then_some(project.role));

    view! {
        <ModalFrame title=project.title selected>
            <div
                class="relative overflow-y-auto px-6 md:px-8 py-6 space-y-10"
                on:scroll=move |ev| {
                    let top = event_target::<web_sys::Element>(&ev).scroll_top();
                    set_hint(top <= SCROLL_HINT_PX);
                }
            >
                <Gallery project gallery />
                {intro.map(|text| view! { <Block heading="소개">{paragraph(text)}</Block> })}
                {detail.has_meta().then(|| view! { <Meta detail /> })}
                {(!project.tech_stack.is_empty())
                    .then(|| {
                        view! {
                            <Block heading="기술 스택">
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .tech_stack
                                        .iter()
                                        .map(|tech| view! { <TechBox tech=*tech /> })
                                        .collect_view()}
                                </div>
                            </Block>
                        }
                    })}
                {(!detail.features.is_empty())
                    .then(|| view! { <Block heading="주요 기능">{bullets(detail.features)}</Block> })}
                {(!detail.highlights.is_empty())
                    .then(|| view! { <Block heading="핵심 포인트">{bullets(detail.highlights)}</Block> })}
                {detail
                    .tech_reasons
                    .map(|text| view! { <Block heading="기술 선택 이유">{paragraph(text)}</Block> })}
                {(!detail.issues.is_empty())
                    .then(|| {
                        view! {
                            <Block heading="문제 해결">
                                <div class="grid gap-4">
                                    {detail
                                        .issues
                                        .iter()
                                        .map(|issue| {
                                            view! {
                                                <div class="rounded-2xl border border-slate-800/70 bg-slate-900/30 p-5 space-y-2">
                                                    <p class="text-sm font-bold text-rose-200">{issue.problem}</p>
                                                    <p class="text-sm leading-relaxed text-slate-300">
                                                        {issue.solution}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Block>
                        }
                    })}
                {detail
                    .takeaway
                    .map(|text| view! { <Block heading="회고">{paragraph(text)}</Block> })}
                <div
                    class="sticky bottom-2 flex justify-center pointer-events-none transition-opacity duration-300"
                    class=("opacity-0", move || !hint.get())
                >
                    <span class="px-4 py-1.5 rounded-full bg-slate-800/90 text-xs text-slate-300">
                        "아래로 스크롤 ↓"
                    </span>
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
fn Gallery(project: &'static Project, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let thumbnails = GalleryState::thumbnails(project);
    if thumbnails.is_empty() {
        return ().into_any();
    }
    let active = move || gallery.with(|g| g.active_index(project));

    view! {
        <div class="space-y-3">
            {move || {
                gallery
                    .with(|g| g.active_image(project))
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=project.title
                                class="w-full max-h-[55vh] object-contain rounded-2xl bg-slate-900"
                            />
                        }
                    })
            }}
            <div class="flex gap-2 overflow-x-auto scrollbar-hide">
                {thumbnails
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| gallery.update(|g| g.select(project, index))
                                class=move || {
                                    if active() == index {
                                        "shrink-0 h-16 w-24 rounded-lg overflow-hidden border-2 border-teal-400"
                                    } else {
                                        "shrink-0 h-16 w-24 rounded-lg overflow-hidden border-2 border-transparent opacity-60 hover:opacity-100"
                                    }
                                }
                            >
                                <img src=*src alt="" loading="lazy" class="h-full w-full object-cover" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn Meta(detail: ProjectDetail) -> impl IntoView {
    let row = |label: &'static str, value: Option<&'static str>| {
        value.map(|value| {
            view! {
                <div class="flex gap-3">
                    <dt class="w-16 shrink-0 text-slate-500">{label}</dt>
                    <dd class="text-slate-200">{value}</dd>
                </div>
            }
        })
    };

    view! {
        <dl class="grid gap-2 text-sm rounded-2xl border border-slate-800/70 bg-slate-900/20 p-5">
            {row("상태", detail.status_label)}
            {row("기간", detail.duration)}
            {row("인원", detail.team)}
            {(!detail.contribution.is_empty())
                .then(|| {
                    view! {
                        <div class="flex gap-3">
                            <dt class="w-16 shrink-0 text-slate-500">"기여도"</dt>
                            <dd class="flex flex-wrap gap-2">
                                {detail
                                    .contribution
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <span class="px-2.5 py-0.5 rounded-full bg-teal-500/10 text-teal-200 text-xs">
                                                {*c}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </dd>
                        </div>
                    }
                })}
        </dl>
    }
}

#[component]
fn Block(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h4 class="mb-3 text-sm font-extrabold tracking-widest text-teal-300">{heading}</h4>
            {children()}
        </section>
    }
}

fn paragraph(text: &'static str) -> impl IntoView {
    view! { <p class="text-sm md:text-[15px] leading-relaxed text-slate-300 whitespace-pre-line">{text}</p> }
}

fn bullets(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex gap-3 items-start text-sm leading-relaxed text-slate-300">
                            <span class="mt-[8px] h-1.5 w-1.5 rounded-full bg-teal-400/80 shrink-0"></span>
                            {*item}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
