use leptos::{ev::MouseEvent, prelude::*};

use super::{
    modals::{ProjectDetailModal, ProjectPdfModal},
    title::SectionTitle,
};
use crate::content::{
    emphasize, tech_initials, tech_logo, GalleryState, Project, ProjectView, PROJECTS,
};

const MAX_TECH_BADGES: usize = 9;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let selected = RwSignal::new(None::<ProjectView>);
    let gallery = RwSignal::new(GalleryState::default());

    view! {
        <section id="projects" class="min-h-screen bg-slate-950">
            <div class="w-full max-w-7xl mx-auto px-6 md:px-12 lg:px-24 py-28">
                <SectionTitle
                    eyebrow="Projects"
                    title="프로젝트"
                    description="카드를 눌러 프로젝트 상세 내용을 확인할 수 있습니다."
                />
                <div class="mt-14 grid gap-8 md:grid-cols-2 xl:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project selected /> })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected
                    .get()
                    .map(|opened| match opened {
                        ProjectView::Pdf { project, url } => {
                            view! { <ProjectPdfModal project url selected /> }.into_any()
                        }
                        ProjectView::Detail { project, detail } => {
                            view! { <ProjectDetailModal project detail gallery selected /> }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    selected: RwSignal<Option<ProjectView>>,
) -> impl IntoView {
    let wip = project.is_wip();
    let open = move |_| match project.open() {
        Ok(opened) => selected.set(Some(opened)),
        Err(err) => log::debug!("{err}"),
    };
    let techs = &project.tech_stack[..project.tech_stack.len().min(MAX_TECH_BADGES)];

    view! {
        <article class=format!(
            "relative flex flex-col rounded-3xl border border-slate-800/70 bg-slate-900/20 p-7 transition {}",
            if wip { "opacity-60" } else { "hover:border-slate-700/80 hover:bg-slate-900/35" },
        )>
            <div class="flex items-center gap-4">
                {match project.image {
                    Some(src) => {
                        view! {
                            <img
                                src=src
                                alt=project.title
                                loading="lazy"
                                class="h-14 w-14 rounded-2xl object-cover bg-slate-950"
                            />
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="h-14 w-14 rounded-2xl bg-slate-800/60 flex items-center justify-center text-slate-500 text-xs font-bold">
                                "WIP"
                            </div>
                        }
                            .into_any()
                    }
                }}
                <div class="min-w-0">
                    <h3 class="text-lg font-extrabold text-slate-100 leading-snug">
                        {project.title}
                    </h3>
                    <p class="mt-1 text-xs text-slate-500">{project.period}</p>
                </div>
            </div>

            <p class="mt-3 text-sm text-slate-400">
                {emphasize(project.people)
                    .into_iter()
                    .map(|(strong, text)| {
                        if strong {
                            view! { <strong class="font-extrabold text-teal-300">{text}</strong> }
                                .into_any()
                        } else {
                            text.into_any()
                        }
                    })
                    .collect_view()}
            </p>
            <p class="mt-4 text-sm leading-relaxed text-slate-300">{project.summary}</p>

            <div class="mt-5 flex flex-wrap gap-2">
                {techs.iter().map(|tech| view! { <TechBox tech=*tech /> }).collect_view()}
            </div>

            <div class="mt-auto pt-6 flex flex-wrap items-center gap-3">
                <button
                    type="button"
                    disabled=wip
                    on:click=open
                    class="h-10 px-5 rounded-full text-sm font-bold bg-teal-400 text-slate-950 transition hover:bg-teal-300 disabled:bg-slate-700 disabled:text-slate-400 disabled:cursor-not-allowed"
                >
                    {if wip { "준비 중" } else { "자세히 보기" }}
                </button>
                {project
                    .links
                    .demo
                    .map(|href| view! { <ExternalLink href label="Demo" /> })}
                {project
                    .links
                    .repo
                    .map(|href| view! { <ExternalLink href label="GitHub" /> })}
            </div>
        </article>
    }
}

#[component]
fn ExternalLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            on:click=|ev: MouseEvent| ev.stop_propagation()
            class="h-10 inline-flex items-center px-4 rounded-full text-sm font-semibold border border-slate-700 text-slate-300 hover:text-white hover:border-slate-500 transition"
        >
            {label}
        </a>
    }
}

/// Tech badge: the logo when one is known, initials otherwise.
#[component]
pub(super) fn TechBox(tech: &'static str) -> impl IntoView {
    view! {
        <span
            title=tech
            class="inline-flex items-center gap-2 h-8 pl-1.5 pr-3 rounded-lg bg-slate-950/40 border border-slate-800/60 text-xs font-semibold text-slate-300"
        >
            {match tech_logo(tech) {
                Some(src) => {
                    view! { <img src=src alt="" class="h-5 w-5 object-contain" /> }.into_any()
                }
                None => {
                    view! {
                        <span class="h-5 w-5 rounded bg-slate-800 flex items-center justify-center text-[9px] font-black text-slate-400">
                            {tech_initials(tech)}
                        </span>
                    }
                        .into_any()
                }
            }}
            {tech}
        </span>
    }
}
