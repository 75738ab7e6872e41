use leptos::prelude::*;

use crate::content::{
    Experience, Project, Stat, ABOUT_HIGHLIGHTS, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL,
    MOODBOARD_IMAGES,
};

#[component]
pub fn SectionHeading(kicker: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-3 text-center">
            <div class="text-xs uppercase tracking-[0.35em] text-moss/70">{kicker}</div>
            <h2 class="font-display text-3xl font-semibold text-bark sm:text-4xl">{title}</h2>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <a
            href=project.href
            target="_blank"
            rel="noreferrer"
            class="group overflow-hidden rounded-3xl border border-amber/30 bg-white/80 shadow-leaf-soft transition hover:-translate-y-1.5"
        >
            <div class="relative h-40 overflow-hidden">
                <img
                    src=project.image
                    alt="Project preview"
                    class="h-full w-full object-cover transition duration-700 group-hover:scale-105"
                />
                <span class="absolute inset-0 bg-gradient-to-t from-bark/70 via-bark/10 to-transparent"></span>
            </div>
            <div class="flex flex-col gap-4 p-6">
                <div>
                    <h3 class="font-display text-xl text-bark">{project.title}</h3>
                    <p class="mt-2 text-sm text-bark/70">{project.blurb}</p>
                </div>
                <div class="flex flex-wrap gap-2 text-xs font-medium text-bark/70">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-amber/20 px-3 py-1 text-bark">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn ExperienceCard(exp: &'static Experience) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col gap-4 rounded-3xl border border-amber/30 bg-white px-6 py-8 shadow-leaf-soft transition hover:-translate-y-1">
            <div class="flex flex-wrap items-baseline justify-between gap-3">
                <div>
                    <div class="font-display text-xl text-bark">{exp.role}</div>
                    <div class="text-sm font-semibold text-bark/70">{exp.org}</div>
                </div>
                <div class="text-xs uppercase tracking-widest text-bark/50">{exp.time}</div>
            </div>
            <ul class="space-y-2 text-sm leading-relaxed text-bark/75">
                {exp.bullets
                    .iter()
                    .map(|bullet| {
                        view! {
                            <li class="relative pl-5">
                                <span class="absolute left-0 top-2 h-1 w-1 rounded-full bg-amber"></span>
                                {*bullet}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn StatBubble(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/20 bg-white/10 px-6 py-5 text-left shadow-2xl backdrop-blur">
            <div class="text-xs uppercase tracking-[0.3em] text-white/70">{stat.label}</div>
            <div class="mt-2 text-sm font-semibold text-white">{stat.value}</div>
        </div>
    }
}

#[component]
pub fn AboutBody() -> impl IntoView {
    view! {
        <div class="grid items-center gap-12 lg:grid-cols-[1.1fr_0.9fr]">
            <div class="space-y-6 text-base leading-relaxed text-bark/85">
                <p>
                    "I'm currently studying Computer Science at Stockton University and channeling my curiosity into building useful software. Whether it's a process automation, an analytics workflow, or a digital storefront, I aim for balanced solutions that blend clarity and craft."
                </p>
                <p>
                    "Outside the keyboard, you'll find me exploring specialty coffee shops, photographing everyday details, or diving into new research rabbit holes. That curiosity keeps my work patient, deliberate, and always evolving."
                </p>
                <ul class="grid gap-3 sm:grid-cols-2">
                    {ABOUT_HIGHLIGHTS
                        .iter()
                        .map(|highlight| {
                            view! {
                                <li class="rounded-2xl border border-amber/30 bg-white/70 px-4 py-3 shadow-leaf-soft">
                                    {*highlight}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="relative">
                <div class="absolute -inset-5 -z-10 rounded-3xl bg-gradient-to-br from-amber/40 via-transparent to-transparent blur-2xl"></div>
                <img
                    src="/Headshot.jpg"
                    alt="Portrait of Justin Hoang"
                    class="h-full w-full rounded-3xl object-cover shadow-leaf"
                />
            </div>
        </div>
    }
}

#[component]
pub fn GalleryGrid() -> impl IntoView {
    view! {
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {MOODBOARD_IMAGES
                .iter()
                .map(|src| {
                    view! {
                        <div class="relative overflow-hidden rounded-3xl bg-bark/20 shadow-lg">
                            <img
                                src=*src
                                alt="Captured inspiration"
                                class="h-48 w-full object-cover transition duration-700 hover:scale-105"
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ContactPanel() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-[1.1fr_0.9fr]">
            <a
                href=format!("mailto:{CONTACT_EMAIL}")
                class="flex flex-col gap-4 rounded-3xl border border-amber/30 bg-white px-6 py-8 shadow-leaf transition hover:scale-[1.02] active:scale-[0.98]"
            >
                <div class="flex items-center justify-between">
                    <div>
                        <div class="font-display text-xl">"Reach out via email"</div>
                        <p class="mt-1 text-sm text-bark/70">
                            "Share a project brief, internship opportunity, or just say hello. I respond within two business days."
                        </p>
                    </div>
                    <MailGlyph />
                </div>
                <span class="text-base font-semibold">{CONTACT_EMAIL}</span>
            </a>

            <div class="flex flex-col gap-4 rounded-3xl border border-amber/30 bg-white px-6 py-8 shadow-leaf-soft">
                <div class="flex items-center justify-between">
                    <div class="font-display text-xl">"Elsewhere"</div>
                    <ExternalGlyph class="h-5 w-5 text-amber" />
                </div>
                <div class="flex flex-wrap gap-3 text-sm font-semibold">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 rounded-full bg-mist px-3 py-2 text-bark transition hover:bg-amber/30"
                    >
                        <i class="devicon-github-plain"></i>
                        " GitHub"
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 rounded-full bg-mist px-3 py-2 text-bark transition hover:bg-amber/30"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        " LinkedIn"
                    </a>
                </div>
                <p class="text-sm text-bark/70">
                    "Let me know if you'd like a tailored resume or a walkthrough of any project."
                </p>
            </div>
        </div>
    }
}

#[component]
fn MailGlyph() -> impl IntoView {
    view! {
        <svg
            class="h-6 w-6 text-amber"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <rect width="20" height="16" x="2" y="4" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        </svg>
    }
}

#[component]
pub fn ExternalGlyph(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M15 3h6v6"></path>
            <path d="M10 14 21 3"></path>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
        </svg>
    }
}
