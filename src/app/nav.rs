use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::content::{NavItem, NAV_ITEMS};
use crate::tracker::{underline_span, SectionTracker, VisibilityEvent};

/// Middle-of-viewport focus band: the observation root is inset by 40% on
/// top and bottom, so only the central 20% of the viewport counts.
const FOCUS_BAND_MARGIN: &str = "-40% 0px -40% 0px";
const FOCUS_THRESHOLDS: [f64; 4] = [0.2, 0.4, 0.6, 1.0];

/// Follows the section currently inside the viewport focus band.
///
/// Resolves the declared ids to DOM regions once the page has mounted
/// (ids without an element are skipped), attaches one intersection
/// observer to all of them, and funnels every notification batch through
/// a [`SectionTracker`]. The caller gets the read half of the state; the
/// write half stays inside the observer callback. Observation and the
/// tracker are both released when the owning scope is disposed.
pub fn use_active_section(items: &'static [NavItem]) -> ReadSignal<&'static str> {
    let tracker = StoredValue::new(SectionTracker::new(items));
    let (active, set_active) = signal(tracker.with_value(|t| t.active()));

    let targets = RwSignal::new_local(Vec::<web_sys::Element>::new());

    Effect::new(move |_| {
        let doc = document();
        let mut found = Vec::new();
        for item in items {
            if let Some(el) = doc.get_element_by_id(item.id) {
                tracker.update_value(|t| {
                    t.subscribe(item.id);
                });
                found.push(el);
            }
        }
        targets.set(found);
    });

    use_intersection_observer_with_options(
        targets,
        move |entries, _| {
            let batch = entries
                .iter()
                .map(|entry| VisibilityEvent {
                    target_id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    boundary_top: entry.bounding_client_rect().top(),
                })
                .collect::<Vec<_>>();
            if let Some(id) = tracker.try_update_value(|t| t.dispatch(&batch)).flatten() {
                set_active.set(id);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(FOCUS_BAND_MARGIN)
            .thresholds(FOCUS_THRESHOLDS.to_vec()),
    );

    on_cleanup(move || {
        tracker.update_value(|t| t.release());
    });

    active
}

/// Fire-and-forget smooth scroll request. The ensuing scroll re-triggers
/// the intersection updates once the target reaches the focus band, so the
/// highlight needs no special handling here. Missing regions scroll
/// nowhere.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn NavBar(active: ReadSignal<&'static str>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b border-amber/30 bg-mist/85 backdrop-blur supports-[backdrop-filter]:bg-mist/80">
            <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
                <Brand />

                <nav class="relative hidden h-full items-center md:flex">
                    <div class="flex gap-6 text-sm font-medium">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id {
                                                "pb-3 pt-2 transition-colors hover:text-moss text-moss"
                                            } else {
                                                "pb-3 pt-2 transition-colors hover:text-moss text-bark/70"
                                            }
                                        }
                                        on:click=move |_| scroll_to_section(id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span
                        class="pointer-events-none absolute bottom-0 block h-[2px] bg-amber shadow-[0_6px_18px_rgba(247,177,94,0.45)] transition-all duration-300 ease-out"
                        style=move || underline_span(&NAV_ITEMS, active.get()).css()
                    ></span>
                </nav>

                <div class="flex items-center gap-3">
                    <a
                        href="/tabs"
                        class="hidden text-xs font-semibold uppercase tracking-widest text-moss/70 transition hover:text-moss sm:inline"
                    >
                        "Tabbed view"
                    </a>
                    <button
                        class="inline-flex items-center gap-2 rounded-full bg-amber px-4 py-2 text-sm font-semibold text-bark shadow-leaf-soft transition hover:bg-ember hover:text-white active:scale-95"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View Projects" <ArrowGlyph />
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Leaf badge + name block shared by both layout variants.
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="flex h-10 w-10 animate-settle items-center justify-center rounded-full bg-amber/20 text-amber">
                <LeafGlyph class="h-5 w-5" />
            </div>
            <div class="leading-tight">
                <div class="font-display text-lg font-semibold">"Justin Hoang"</div>
                <div class="text-xs uppercase tracking-[0.3em] text-moss/70">
                    "Software Engineer"
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LeafGlyph(#[prop(optional)] class: &'static str) -> impl IntoView {
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
            <path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"></path>
            <path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"></path>
        </svg>
    }
}

#[component]
pub fn ArrowGlyph() -> impl IntoView {
    view! {
        <svg
            class="h-4 w-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M5 12h14"></path>
            <path d="m12 5 7 7-7 7"></path>
        </svg>
    }
}
