use leptos::prelude::*;

use super::title::SectionTitle;
use crate::content::{Capability, ExperienceCase, CAPABILITIES, EXPERIENCE_CASES};

const MAX_TAGS: usize = 7;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="problem" class="min-h-screen bg-slate-950">
            <div class="w-full max-w-7xl mx-auto px-6 md:px-12 lg:px-24 py-28">
                <SectionTitle
                    eyebrow="Capabilities & Problem Solving"
                    title="역량 및 문제해결"
                    description="프로젝트 경험을 통해 쌓아온 기술 역량과 문제를 해결해온 과정을 정리했습니다."
                />
                <Panel
                    heading="역량"
                    caption="프로젝트를 진행하며 실제로 활용했던 기술과 적용 경험을 정리했습니다."
                    class="mt-14 bg-slate-900/15"
                >
                    <div class="mt-8 grid gap-6 md:grid-cols-2">
                        {CAPABILITIES
                            .iter()
                            .map(|cap| view! { <CapabilityCard cap /> })
                            .collect_view()}
                    </div>
                </Panel>
                <Panel
                    heading="문제해결"
                    caption="문제를 정의하고, 해결 방법을 선택하며, 결과를 검증하는 과정을 기록했습니다."
                    class="mt-10 bg-slate-900/20"
                >
                    <div class="mt-8 grid gap-6">
                        {EXPERIENCE_CASES
                            .iter()
                            .map(|case| view! { <CaseCard case /> })
                            .collect_view()}
                    </div>
                </Panel>
            </div>
        </section>
    }
}

#[component]
fn Panel(
    heading: &'static str,
    caption: &'static str,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-3xl border border-slate-800/70 p-8 md:p-10 shadow-[0_20px_60px_rgba(0,0,0,0.45)] {class}",
        )>
            <div class="flex items-center gap-3">
                <div>
                    <h3 class="text-xl md:text-2xl font-extrabold text-slate-100">{heading}</h3>
                    <p class="mt-1 text-sm text-slate-500">{caption}</p>
                </div>
            </div>
            {children()}
        </div>
    }
}

#[component]
fn CapabilityCard(cap: &'static Capability) -> impl IntoView {
    let tags = &cap.tags[..cap.tags.len().min(MAX_TAGS)];
    view! {
        <article class="group rounded-2xl border border-slate-800/70 bg-slate-950/25 p-6 md:p-7 h-full flex flex-col transition hover:border-slate-700/80 hover:bg-slate-950/35">
            <h4 class="text-[15px] md:text-[16px] font-extrabold text-slate-100 leading-snug">
                {cap.title}
            </h4>
            <p class="mt-2 text-sm leading-relaxed text-slate-500 whitespace-pre-line">
                {cap.summary}
            </p>
            <ul class="mt-4 space-y-2">
                {cap
                    .points
                    .iter()
                    .map(|p| {
                        view! {
                            <li class="flex gap-3 items-start">
                                <span class="mt-[9px] h-2 w-2 rounded-full bg-teal-400/80 shrink-0"></span>
                                <p class="text-sm leading-relaxed text-slate-300">{*p}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-auto pt-5 flex flex-wrap gap-2 opacity-0 translate-y-1 transition group-hover:opacity-100 group-hover:translate-y-0 group-focus-within:opacity-100 group-focus-within:translate-y-0">
                            {tags
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="inline-flex items-center h-7 px-3 rounded-full text-xs font-semibold bg-slate-900/50 border border-slate-800/60 text-slate-300">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </article>
    }
}

#[component]
fn CaseCard(case: &'static ExperienceCase) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-800/70 bg-slate-950/30 p-6 md:p-7">
            <div class="min-w-0">
                {case
                    .project
                    .map(|p| {
                        view! {
                            <p class="text-xs tracking-[0.28em] uppercase text-teal-300">{p}</p>
                        }
                    })}
                <h4 class="mt-2 text-lg md:text-xl font-extrabold text-slate-100">{case.title}</h4>
            </div>
            <div class="mt-5 grid gap-4">
                {case
                    .items
                    .iter()
                    .map(|(label, text)| {
                        view! {
                            <div class="grid grid-cols-[78px_1fr] gap-4 items-start">
                                <span class=format!(
                                    "inline-flex items-center justify-center h-8 px-3 rounded-[6px] text-xs font-semibold border {}",
                                    label.badge_class(),
                                )>{label.text()}</span>
                                <p class="text-sm md:text-[15px] leading-relaxed text-slate-300 whitespace-pre-line">
                                    {*text}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
