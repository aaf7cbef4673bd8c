use leptos::prelude::*;

use super::lazy_image::LazyImage;
use super::reveal::Reveal;
use super::theme::use_theme;

struct Project {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
    tech: &'static [&'static str],
    repo: &'static str,
    demo: &'static str,
    details: &'static str,
    impact: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "Driftwood",
        blurb: "Embedded time-series store with tiered compaction and a SQL-ish query layer.",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&h=600&fit=crop",
        tech: &["Rust", "io_uring", "Arrow", "SQLite"],
        repo: "https://github.com/icalloway/driftwood",
        demo: "https://driftwood.iriscalloway.dev",
        details: "A single-node time-series engine built for edge devices: append-heavy writes \
                  land in a WAL, age into sorted runs, and compact into columnar segments. The \
                  query layer pushes predicates down to segment metadata so most scans never \
                  touch disk.",
        impact: "Sustains 400k writes/sec on a Raspberry Pi 5; used by two home-lab fleets",
    },
    Project {
        title: "Ledgerline",
        blurb: "Self-hosted budgeting app with bank import, rules, and shared households.",
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=800&h=600&fit=crop",
        tech: &["Rust", "Leptos", "Axum", "PostgreSQL"],
        repo: "https://github.com/icalloway/ledgerline",
        demo: "https://ledgerline.iriscalloway.dev",
        details: "Full-stack Leptos application: server-rendered shell, WASM hydration, and a \
                  rules engine that categorises imported transactions. Multi-user households \
                  share budgets with per-member visibility controls.",
        impact: "Runs in ~40MB RSS; 1.2k GitHub stars and a small but loud user base",
    },
    Project {
        title: "Quorum",
        blurb: "Raft-backed key-value store built to teach consensus by reading the logs.",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=600&fit=crop",
        tech: &["Rust", "Tokio", "gRPC", "Prometheus"],
        repo: "https://github.com/icalloway/quorum",
        demo: "https://quorum.iriscalloway.dev",
        details: "A deliberately observable Raft implementation: every election, append, and \
                  snapshot is narrated in structured logs, and the bundled dashboard replays \
                  cluster history step by step. Used as course material by two universities.",
        impact: "Passes the Jepsen-style fault suite included in the repo; 800+ stars",
    },
    Project {
        title: "Penlight",
        blurb: "Markdown-first publishing tool that renders to static HTML with zero client JS.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop",
        tech: &["Rust", "pulldown-cmark", "Tera", "GitHub Actions"],
        repo: "https://github.com/icalloway/penlight",
        demo: "https://penlight.iriscalloway.dev",
        details: "Static site generator tuned for long-form writing: footnotes, sidenotes, \
                  syntax highlighting at build time, and an incremental build cache that only \
                  re-renders changed pages.",
        impact: "Builds a 400-page site in under a second; powers this portfolio's blog",
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let theme = use_theme();
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="max-w-6xl mx-auto">
                        <h2 class=move || {
                            format!(
                                "text-4xl md:text-5xl font-bold text-center mb-16 {}",
                                if theme.is_dark() { "text-white" } else { "text-gray-900" },
                            )
                        }>"Featured Projects"</h2>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            {PROJECTS
                                .iter()
                                .enumerate()
                                .map(|(i, project)| {
                                    view! {
                                        <div
                                            class=move || {
                                                format!(
                                                    "group cursor-pointer rounded-lg overflow-hidden transition-all duration-300 shadow-lg hover:shadow-xl hover:-translate-y-2 {}",
                                                    if theme.is_dark() { "bg-gray-800" } else { "bg-white" },
                                                )
                                            }
                                            on:click=move |_| set_selected.set(Some(i))
                                        >
                                            <LazyImage
                                                src=project.image
                                                alt=project.title
                                                class="w-full h-48"
                                            />

                                            <div class="p-6">
                                                <h3 class=move || {
                                                    format!(
                                                        "text-xl font-bold mb-2 {}",
                                                        if theme.is_dark() { "text-white" } else { "text-gray-900" },
                                                    )
                                                }>{project.title}</h3>

                                                <p class=move || {
                                                    format!(
                                                        "mb-4 text-sm {}",
                                                        if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                                    )
                                                }>{project.blurb}</p>

                                                <div class="flex flex-wrap gap-2">
                                                    {project
                                                        .tech
                                                        .iter()
                                                        .take(3)
                                                        .map(|tech| {
                                                            view! {
                                                                <span class="px-2 py-1 text-xs font-medium bg-indigo-100 text-indigo-800 rounded dark:bg-indigo-900 dark:text-indigo-200">
                                                                    {*tech}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                    {(project.tech.len() > 3)
                                                        .then(|| {
                                                            view! {
                                                                <span class="px-2 py-1 text-xs font-medium bg-gray-100 text-gray-600 rounded dark:bg-gray-700 dark:text-gray-300">
                                                                    {format!("+{} more", project.tech.len() - 3)}
                                                                </span>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>

            {move || {
                selected
                    .get()
                    .map(|i| {
                        let project = &PROJECTS[i];
                        view! {
                            <div
                                class="fixed inset-0 bg-black/80 flex items-center justify-center p-4 z-50"
                                on:click=move |_| set_selected.set(None)
                            >
                                <div
                                    class=move || {
                                        format!(
                                            "max-w-2xl w-full rounded-lg overflow-hidden {}",
                                            if theme.is_dark() { "bg-gray-800" } else { "bg-white" },
                                        )
                                    }
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <div class="relative">
                                        // already fetched by the grid card; no need to lazy-load twice
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-64 object-cover"
                                        />
                                        <button
                                            on:click=move |_| set_selected.set(None)
                                            aria-label="Close project details"
                                            class="absolute top-4 right-4 px-3 py-1 bg-black/50 text-white rounded-full hover:bg-black/70 transition-colors"
                                        >
                                            "✕"
                                        </button>
                                    </div>

                                    <div class="p-6">
                                        <h3 class=move || {
                                            format!(
                                                "text-2xl font-bold mb-4 {}",
                                                if theme.is_dark() { "text-white" } else { "text-gray-900" },
                                            )
                                        }>{project.title}</h3>

                                        <p class=move || {
                                            format!(
                                                "mb-4 {}",
                                                if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                            )
                                        }>{project.details}</p>

                                        <p class=move || {
                                            format!(
                                                "mb-6 text-sm font-semibold {}",
                                                if theme.is_dark() { "text-indigo-400" } else { "text-indigo-600" },
                                            )
                                        }>{format!("Impact: {}", project.impact)}</p>

                                        <div class="flex flex-wrap gap-2 mb-6">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-3 py-1 text-sm font-medium bg-indigo-100 text-indigo-800 rounded dark:bg-indigo-900 dark:text-indigo-200">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="flex gap-4">
                                            <a
                                                href=project.repo
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-4 py-2 bg-gray-700 text-white rounded-lg hover:bg-gray-600 transition-colors"
                                            >
                                                "Source"
                                            </a>
                                            <a
                                                href=project.demo
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                                            >
                                                "Live Demo"
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
