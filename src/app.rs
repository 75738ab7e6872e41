mod cards;
mod nav;
mod scroll;
mod tabbed;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use scroll::ScrollPage;
use tabbed::TabbedPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Playfair+Display:wght@500;600;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-mist text-bark font-body">
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
        // sets the document title
        <Title formatter=|title| format!("Justin Hoang - {title}") />

        <Router>
            <div class="min-h-screen">
                // warm paper grain + soft wash behind every view
                <div class="pointer-events-none fixed inset-0 -z-20 bg-fall-paper [background-size:24px_24px] opacity-50"></div>
                <div class="pointer-events-none fixed inset-0 -z-10 bg-gradient-to-b from-[rgba(255,255,255,0.55)] via-transparent to-transparent"></div>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=ScrollPage />
                    <Route path=path!("/tabs") view=TabbedPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer class="border-t border-amber/30 bg-white/70 py-8 text-center text-xs text-bark/60">
            <p>{format!("© {year} Justin Hoang · Crafted with care.")}</p>
            <p class="mt-1 text-bark/40">
                {format!(
                    "v{} · built {}",
                    env!("CARGO_PKG_VERSION"),
                    &env!("BUILD_TIME")[..10],
                )}
            </p>
        </footer>
    }
}
