use leptos::prelude::*;

use super::title::SectionTitle;
use crate::content::{Skill, SkillLevel, CORE_SKILLS, OTHER_SKILLS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="min-h-screen bg-slate-950 flex items-center">
            <div class="w-full max-w-6xl mx-auto px-6 md:px-12 lg:px-24">
                <SectionTitle
                    eyebrow="Skills"
                    title="기술 스택"
                    description="실제 프로젝트에 적용해본 기술들입니다."
                />
                <div class="grid gap-16 md:grid-cols-2">
                    <SkillList heading="Frontend" skills=CORE_SKILLS />
                    <SkillList heading="Others" skills=OTHER_SKILLS />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList(heading: &'static str, skills: &'static [Skill]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-6">{heading}</h3>
            <ul class="space-y-3">
                {skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="flex items-center gap-3 text-slate-300">
                                {skill.name}
                                {skill
                                    .category
                                    .map(|c| view! { <span class="text-xs text-slate-500">{c}</span> })}
                                {skill.level.map(|level| view! { <LevelDots level /> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn LevelDots(level: SkillLevel) -> impl IntoView {
    let filled = match level {
        SkillLevel::Basic => 1,
        SkillLevel::Intermediate => 2,
        SkillLevel::Advanced => 3,
    };
    view! {
        <span class="ml-auto flex gap-1" title=format!("{level:?}")>
            {(0..3)
                .map(|i| {
                    let tone = if i < filled { "bg-teal-400" } else { "bg-slate-700" };
                    view! { <span class=format!("h-1.5 w-1.5 rounded-full {tone}")></span> }
                })
                .collect_view()}
        </span>
    }
}
