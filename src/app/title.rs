use leptos::prelude::*;

#[component]
pub fn SectionTitle(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-10 md:mb-16 text-left">
            <p class="text-xs tracking-[0.05em] md:tracking-[0.3em] uppercase text-slate-500 mb-2 md:mb-4">
                {eyebrow}
            </p>
            <h2 class="text-4xl md:text-5xl font-black md:font-extrabold leading-tight">{title}</h2>
            {description
                .map(|d| {
                    view! {
                        <p class="mt-2 md:mt-4 text-[9px] md:text-lg text-slate-400 leading-relaxed whitespace-pre-line">
                            {d}
                        </p>
                    }
                })}
        </div>
    }
}
