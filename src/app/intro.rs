use leptos::prelude::*;

use crate::content::OWNER;

#[component]
pub fn IntroSection() -> impl IntoView {
    view! {
        <section
            id="intro"
            class="min-h-screen flex flex-col justify-center px-6 md:px-4 lg:px-24 bg-slate-950 text-white"
        >
            <p class="text-xs tracking-[0.3em] uppercase text-teal-300 mb-4">"Frontend Developer"</p>
            <h1 class="text-5xl md:text-7xl font-black leading-tight">
                "안녕하세요,"<br />{OWNER}"입니다."
            </h1>
            <p class="mt-6 max-w-2xl text-base md:text-lg text-slate-400 leading-relaxed">
                "사용자가 머무는 화면을 만들고, 그 화면이 빠르고 안정적으로 동작하도록 다듬습니다."
            </p>
        </section>
    }
}
