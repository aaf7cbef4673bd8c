mod about;
mod contact;
mod experience;
mod header;
mod hero;
mod lazy_image;
mod projects;
mod reveal;
mod site;
mod skills;
mod theme;

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use self::about::AboutSection;
use self::contact::ContactSection;
use self::experience::ExperienceSection;
use self::header::Header;
use self::hero::Hero;
use self::projects::ProjectsSection;
use self::skills::SkillsSection;
use self::theme::{use_theme, ThemeProvider};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
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
        <Title formatter=|title| format!("{} - {title}", site::OWNER_NAME) />

        <ThemeProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=PortfolioPage />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!(
                "min-h-screen transition-colors duration-300 {}",
                if theme.is_dark() { "bg-gray-900" } else { "bg-gray-50" },
            )
        }>
            <Header />
            <Hero />
            <div class="space-y-0">
                <AboutSection />
                <ExperienceSection />
                <ProjectsSection />
                <SkillsSection />
                <ContactSection />
            </div>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let theme = use_theme();
    let year = Utc::now().year();
    let built = env!("BUILD_TIME").split('T').next().unwrap_or("").to_string();
    view! {
        <footer class=move || {
            format!(
                "py-8 text-center border-t backdrop-blur-md {}",
                if theme.is_dark() {
                    "border-gray-800/50 text-gray-400 bg-gray-900/80"
                } else {
                    "border-gray-200/50 text-gray-600 bg-white/80"
                },
            )
        }>
            <div class="container mx-auto px-4">
                <p>{format!("© {year} {}. All rights reserved.", site::OWNER_NAME)}</p>
                <div class="flex justify-center gap-4 mt-3 text-sm">
                    <a
                        href=site::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline"
                    >
                        "GitHub"
                    </a>
                    <a
                        href=site::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline"
                    >
                        "LinkedIn"
                    </a>
                </div>
                <p class="text-xs mt-2 opacity-60">
                    {format!("Built with Rust & Leptos · last deployed {built}")}
                </p>
            </div>
        </footer>
    }
}
