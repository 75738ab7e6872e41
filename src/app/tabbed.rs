use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::cards::{
    AboutBody, ContactPanel, ExperienceCard, GalleryGrid, ProjectCard, SectionHeading, StatBubble,
};
use super::nav::{Brand, LeafGlyph};
use crate::content::{find_item, EXPERIENCE, HERO_BACKDROP, HERO_STATS, NAV_ITEMS, PROJECTS};
use crate::tracker::underline_span;

/// The tabbed multi-view layout: one panel at a time behind a tab strip,
/// with decorative foliage drifting behind the content. Tab selection is
/// plain in-memory state; no scroll tracking is involved.
#[component]
pub fn TabbedPage() -> impl IntoView {
    let (tab, set_tab) = signal(NAV_ITEMS[0].id);

    // Deep link: /tabs?tab=projects opens on that panel.
    let query = use_query_map();
    Effect::new(move |_| {
        let Some(requested) = query.get_untracked().get("tab") else {
            return;
        };
        match find_item(&requested) {
            Ok(item) => set_tab.set(item.id),
            Err(err) => log::warn!("ignoring tab deep link: {err}"),
        }
    });

    view! {
        <Title text="Tabbed View" />
        <div class="relative min-h-screen overflow-hidden">
            <DriftingLeaves />
            <div
                class="pointer-events-none absolute -top-24 right-[-10%] -z-10 h-72 w-72 animate-glow rounded-full bg-amber/30 blur-3xl"
                aria-hidden="true"
            ></div>

            <header class="border-b border-amber/30 bg-mist/85 backdrop-blur">
                <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
                    <Brand />
                    <a
                        href="/"
                        class="text-xs font-semibold uppercase tracking-widest text-moss/70 transition hover:text-moss"
                    >
                        "Scrolling view"
                    </a>
                </div>
            </header>

            <TabStrip tab=tab set_tab=set_tab />

            <main class="mx-auto max-w-6xl px-4 pb-24 pt-12">
                {move || match tab.get() {
                    "about" => view! { <AboutTab /> }.into_any(),
                    "projects" => view! { <ProjectsTab /> }.into_any(),
                    "experience" => view! { <ExperienceTab /> }.into_any(),
                    "gallery" => view! { <GalleryTab /> }.into_any(),
                    "contact" => view! { <ContactTab /> }.into_any(),
                    _ => view! { <HomeTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn TabStrip(tab: ReadSignal<&'static str>, set_tab: WriteSignal<&'static str>) -> impl IntoView {
    view! {
        <div class="mx-auto mt-8 max-w-3xl px-4">
            <div class="relative grid grid-cols-3 gap-1 rounded-2xl border border-amber/30 bg-white/70 p-1 text-sm font-medium shadow-leaf-soft backdrop-blur sm:grid-cols-6">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == id {
                                        "rounded-xl px-2 py-2 text-moss transition-colors"
                                    } else {
                                        "rounded-xl px-2 py-2 text-bark/60 transition-colors hover:text-moss"
                                    }
                                }
                                on:click=move |_| set_tab.set(id)
                            >
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()}
                // same equal-slot geometry as the scroll nav underline;
                // only meaningful on the single-row layout
                <span
                    class="pointer-events-none absolute bottom-0 hidden h-[2px] bg-amber transition-all duration-300 ease-out sm:block"
                    style=move || underline_span(&NAV_ITEMS, tab.get()).css()
                ></span>
            </div>
        </div>
    }
}

#[component]
fn HomeTab() -> impl IntoView {
    view! {
        <section class="relative isolate overflow-hidden rounded-3xl shadow-leaf">
            <div class="absolute inset-0 -z-10">
                <img
                    src=HERO_BACKDROP
                    alt="Sunlit forest with golden foliage"
                    class="h-full w-full object-cover"
                />
            </div>
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-[rgba(47,38,33,0.3)] via-[rgba(47,38,33,0.15)] to-[rgba(47,38,33,0.45)]"></div>
            <div class="flex flex-col items-center gap-10 px-6 py-20 text-center text-white">
                <div class="space-y-5">
                    <span class="inline-flex items-center gap-2 rounded-full bg-amber/20 px-4 py-2 text-xs font-medium uppercase tracking-[0.35em] text-amber">
                        "Featured Work"
                    </span>
                    <h1 class="font-display text-3xl leading-tight sm:text-5xl">
                        "Crafting thoughtful software experiences with a calm, polished touch."
                    </h1>
                    <p class="mx-auto max-w-2xl text-base text-white/85">
                        "I'm a computer science student focused on full-stack engineering. Pick a tab above to explore what I've been building."
                    </p>
                </div>
                <div class="grid w-full gap-4 sm:grid-cols-3">
                    {HERO_STATS
                        .iter()
                        .map(|stat| view! { <StatBubble stat=stat /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutTab() -> impl IntoView {
    view! {
        <SectionHeading kicker="About" title="A grounded engineer with a creative streak" />
        <div class="mt-12">
            <AboutBody />
        </div>
    }
}

#[component]
fn ProjectsTab() -> impl IntoView {
    view! {
        <SectionHeading kicker="Recent Work" title="Building purposeful digital products" />
        <div class="mt-12 grid gap-8 md:grid-cols-2 xl:grid-cols-3">
            {PROJECTS
                .iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ExperienceTab() -> impl IntoView {
    view! {
        <SectionHeading kicker="Experience" title="Hands-on roles with real impact" />
        <div class="mt-12 grid gap-6 lg:grid-cols-2">
            {EXPERIENCE
                .iter()
                .map(|exp| view! { <ExperienceCard exp=exp /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn GalleryTab() -> impl IntoView {
    view! {
        <SectionHeading kicker="My Photos" title="Scenes I've captured that influence my craft" />
        <p class="mx-auto mt-6 max-w-2xl text-center text-sm text-bark/70">
            "A few warm-toned visuals from behind my lens that inspire the color choices, typography, and sense of calm in this portfolio."
        </p>
        <div class="mt-10">
            <GalleryGrid />
        </div>
    }
}

#[component]
fn ContactTab() -> impl IntoView {
    view! {
        <SectionHeading
            kicker="Let's Connect"
            title="Open to internships, collaborations, and coffee chats"
        />
        <div class="mt-10">
            <ContactPanel />
        </div>
    }
}

/// Decorative foliage drifting down behind the panels. Fixed positions
/// and staggered delays; purely cosmetic and hidden from assistive tech.
#[component]
fn DriftingLeaves() -> impl IntoView {
    // (left %, delay s, duration s, size px, tint)
    static LEAVES: [(f64, f64, f64, u32, &str); 6] = [
        (8.0, 0.0, 16.0, 28, "#d97c4a"),
        (22.0, 3.5, 21.0, 22, "#fdbb6f"),
        (43.0, 7.0, 18.0, 32, "#b75a3a"),
        (61.0, 1.5, 23.0, 20, "#d97c4a"),
        (78.0, 5.0, 17.0, 26, "#fdbb6f"),
        (91.0, 9.0, 25.0, 24, "#b75a3a"),
    ];

    view! {
        <div class="pointer-events-none absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
            {LEAVES
                .iter()
                .map(|(left, delay, duration, size, tint)| {
                    view! {
                        <span
                            class="absolute -top-10 block animate-drift"
                            style=format!(
                                "left:{left}%;animation-delay:{delay}s;animation-duration:{duration}s;width:{size}px;height:{size}px;color:{tint}",
                            )
                        >
                            <LeafGlyph class="h-full w-full" />
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
