mod contact;
mod experience;
mod intro;
mod modals;
mod nav;
mod progress;
mod projects;
mod skills;
mod title;
mod tracking;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use experience::ExperienceSection;
use intro::IntroSection;
use nav::TopNav;
use progress::ScrollProgressBar;
use projects::ProjectsSection;
use skills::SkillsSection;
use tracking::provide_scroll_tracking;

use crate::content::{OWNER, SECTIONS};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-pretendard bg-slate-950 text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER} - Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section on one page, tracked while scrolling.
#[component]
fn PortfolioPage() -> impl IntoView {
    provide_scroll_tracking(SECTIONS);

    view! {
        <div class="scroll-smooth">
            <ScrollProgressBar />
            <TopNav />
            <IntroSection />
            <SkillsSection />
            <ExperienceSection />
            <ProjectsSection />
            <ContactSection />
        </div>
    }
}
