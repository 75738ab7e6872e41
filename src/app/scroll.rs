use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::{
    AboutBody, ContactPanel, ExperienceCard, ExternalGlyph, GalleryGrid, ProjectCard,
    SectionHeading, StatBubble,
};
use super::nav::{scroll_to_section, use_active_section, ArrowGlyph, NavBar};
use crate::content::{EXPERIENCE, GITHUB_URL, HERO_BACKDROP, HERO_STATS, NAV_ITEMS, PROJECTS};

/// The scrolling one-page layout. All six regions render in declared
/// order; the nav highlight follows whichever one holds the viewport
/// focus band.
#[component]
pub fn ScrollPage() -> impl IntoView {
    let active = use_active_section(&NAV_ITEMS);

    view! {
        <Title text="Portfolio" />
        <NavBar active=active />
        <main class="pb-20">
            <HeroSection />
            <SectionShell id="about">
                <SectionHeading kicker="About" title="A grounded engineer with a creative streak" />
                <div class="mt-12">
                    <AboutBody />
                </div>
            </SectionShell>
            <SectionShell id="projects">
                <SectionHeading kicker="Recent Work" title="Building purposeful digital products" />
                <div class="mt-12 grid gap-8 md:grid-cols-2 xl:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </SectionShell>
            <SectionShell id="experience">
                <SectionHeading kicker="Experience" title="Hands-on roles with real impact" />
                <div class="mt-12 grid gap-6 lg:grid-cols-2">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| view! { <ExperienceCard exp=exp /> })
                        .collect_view()}
                </div>
            </SectionShell>
            <SectionShell id="gallery">
                <SectionHeading
                    kicker="My Photos"
                    title="Scenes I've captured that influence my craft"
                />
                <p class="mx-auto mt-6 max-w-2xl text-sm text-bark/70">
                    "A few warm-toned visuals from behind my lens that inspire the color choices, typography, and sense of calm in this portfolio. Each shot is a reminder to slow down, design intentionally, and highlight the craft behind every build."
                </p>
                <div class="mt-10">
                    <GalleryGrid />
                </div>
            </SectionShell>
            <SectionShell id="contact">
                <SectionHeading
                    kicker="Let's Connect"
                    title="Open to internships, collaborations, and coffee chats"
                />
                <div class="mt-10">
                    <ContactPanel />
                </div>
            </SectionShell>
        </main>
    }
}

/// Region wrapper carrying the id the tracker observes. `scroll-mt-24`
/// keeps anchored scrolls clear of the sticky header.
#[component]
fn SectionShell(id: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="scroll-mt-24">
            <div class="mx-auto max-w-6xl px-4 py-20">{children()}</div>
        </section>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="relative isolate overflow-hidden scroll-mt-24">
            <div class="absolute inset-0 -z-10">
                <img
                    src=HERO_BACKDROP
                    alt="Sunlit forest with golden foliage"
                    class="h-full w-full object-cover"
                />
            </div>
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-[rgba(47,38,33,0.25)] via-[rgba(47,38,33,0.12)] to-[rgba(47,38,33,0.4)]"></div>
            <div class="mx-auto flex max-w-6xl flex-col items-center gap-12 px-4 py-28 text-center text-white">
                <div class="animate-rise space-y-6">
                    <span class="inline-flex items-center gap-2 rounded-full bg-amber/20 px-4 py-2 text-xs font-medium uppercase tracking-[0.35em] text-amber">
                        "Featured Work"
                    </span>
                    <h1 class="font-display text-4xl leading-tight sm:text-5xl md:text-6xl">
                        "Crafting thoughtful software experiences with a calm, polished touch."
                    </h1>
                    <p class="mx-auto max-w-2xl text-base text-white/85 sm:text-lg">
                        "I'm a computer science student focused on full-stack engineering. I build resilient web platforms, intelligent automations, and product moments that feel welcoming and well-considered."
                    </p>
                </div>

                <div class="grid w-full gap-4 sm:grid-cols-3">
                    {HERO_STATS
                        .iter()
                        .map(|stat| view! { <StatBubble stat=stat /> })
                        .collect_view()}
                </div>

                <div class="flex flex-col items-center gap-4 sm:flex-row">
                    <button
                        class="inline-flex items-center gap-2 rounded-full bg-mist px-6 py-3 text-sm font-semibold text-bark shadow-md transition hover:bg-white/90 active:scale-95"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Let's collaborate" <ArrowGlyph />
                    </button>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 text-sm font-semibold text-white/85 transition hover:text-white"
                    >
                        "View GitHub" <ExternalGlyph class="h-4 w-4" />
                    </a>
                </div>
            </div>
        </section>
    }
}
