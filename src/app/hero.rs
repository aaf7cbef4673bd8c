use leptos::prelude::*;

use super::header::scroll_to_section;
use super::site;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            // Animated gradient backdrop; pure CSS, no assets to fetch.
            <div class="absolute inset-0 bg-gradient-to-br from-teal-400/80 via-indigo-600/80 to-purple-700/80 hero-gradient" />

            <div class="relative z-10 text-center text-white max-w-4xl mx-auto px-4">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight hero-fade-up">
                    {site::OWNER_NAME}
                </h1>

                <p class="text-xl md:text-2xl mb-8 text-gray-100 hero-fade-up hero-delay-200">
                    {site::TAGLINE}
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center hero-fade-up hero-delay-400">
                    <a
                        href=site::RESUME_PATH
                        download=site::RESUME_DOWNLOAD_NAME
                        class="bg-yellow-400 text-gray-900 px-8 py-3 rounded-full font-semibold flex items-center justify-center gap-2 hover:bg-yellow-300 transition-colors"
                    >
                        "Download Resume"
                    </a>

                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="border-2 border-white text-white px-8 py-3 rounded-full font-semibold flex items-center justify-center gap-2 hover:bg-white hover:text-gray-900 transition-colors"
                    >
                        "Let's Talk →"
                    </button>
                </div>
            </div>
        </section>
    }
}
