use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::title::SectionTitle;
use crate::content::{ContactKind, ContactLink, CONTACT_LINKS, OWNER};

fn build_year() -> i32 {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(built) => built.year(),
        Err(_) => Utc::now().year(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="min-h-screen flex flex-col bg-slate-950">
            <div class="flex-1 w-full max-w-7xl mx-auto px-6 md:px-12 lg:px-24 py-28">
                <SectionTitle
                    eyebrow="Contact"
                    title="추가 정보"
                    description="더 궁금한 점이 있다면 아래 링크에서 확인하실 수 있습니다."
                />
                <ul class="mt-14 grid gap-4 sm:grid-cols-2">
                    {CONTACT_LINKS.iter().map(|link| view! { <ContactCard link /> }).collect_view()}
                </ul>
            </div>
            <footer class="border-t border-slate-800/70 py-8 text-center text-xs text-slate-500">
                {format!("© {} {OWNER}. All rights reserved.", build_year())}
            </footer>
        </section>
    }
}

#[component]
fn ContactCard(link: &'static ContactLink) -> impl IntoView {
    let glyph = match link.kind {
        ContactKind::Github => "GH",
        ContactKind::Blog => "B",
        ContactKind::Email => "@",
        ContactKind::Phone => "☎",
        ContactKind::Etc => "→",
    };
    let external = matches!(
        link.kind,
        ContactKind::Github | ContactKind::Blog | ContactKind::Etc
    );

    view! {
        <li>
            <a
                href=link.href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class="group flex items-center gap-4 rounded-2xl border border-slate-800/70 bg-slate-900/20 p-5 transition hover:border-teal-400/50 hover:bg-slate-900/40"
            >
                <span class="h-11 w-11 shrink-0 rounded-xl bg-slate-800/70 flex items-center justify-center text-sm font-black text-teal-300">
                    {glyph}
                </span>
                <span class="min-w-0">
                    <span class="block text-sm font-extrabold text-slate-100">{link.label}</span>
                    <span class="block truncate text-xs text-slate-500 group-hover:text-slate-300">
                        {link.href}
                    </span>
                </span>
            </a>
        </li>
    }
}
