use leptos::either::{Either, EitherOf3};
use leptos::prelude::*;
use portfolio_client::{use_projects, ApiConfig, ProjectsProvider};

use crate::components::{Layout, ProjectCard};

/// Base URL of the backend API, captured when the build was produced.
///
/// `option_env!` keeps the lookup at compile time; at runtime the value
/// is an ordinary constant that gets validated through [`ApiConfig`].
const API_BASE_URL: Option<&str> = option_env!("PORTFOLIO_API_URL");

/// Application root: validates configuration, then mounts the provider
/// that owns the fetch lifecycle.
///
/// A build without `PORTFOLIO_API_URL` renders a configuration-error
/// panel instead of issuing requests to a URL that cannot exist.
#[component]
pub fn App() -> impl IntoView {
    match API_BASE_URL.map(ApiConfig::new) {
        Some(Ok(config)) => Either::Left(view! {
            <ProjectsProvider config=config>
                <Portfolio />
            </ProjectsProvider>
        }),
        Some(Err(_)) | None => Either::Right(view! {
            <Layout>
                <h2 class="error-title">"⚠️ Configuration error"</h2>
                <p>
                    "PORTFOLIO_API_URL was not set when this build was made, "
                    "so the app does not know where the backend lives."
                </p>
            </Layout>
        }),
    }
}

/// The portfolio view proper: a pure function of the fetch state.
///
/// Exactly one of the three branches renders at any time: loading wins,
/// then the error panel, then the card list.
#[component]
fn Portfolio() -> impl IntoView {
    let state = use_projects();
    let projects = state.projects;
    let is_loading = state.is_loading;
    let error = state.error;
    let refresh = state.refresh;

    move || {
        if is_loading.get() {
            EitherOf3::A(view! {
                <h2 class="loading">"🌀 Loading projects..."</h2>
            })
        } else if let Some(message) = error.get() {
            EitherOf3::B(view! {
                <Layout>
                    <h2 class="error-title">"⚠️ Error loading portfolio"</h2>
                    <p>{message}</p>
                    <p class="error-hint">
                        "Check that the backend server is running and reachable."
                    </p>
                </Layout>
            })
        } else {
            let refresh = refresh.clone();
            EitherOf3::C(view! {
                <Layout>
                    <div class="project-list">
                        <For
                            each=move || projects.get()
                            key=|project| project.id
                            let:project
                        >
                            <ProjectCard project=project />
                        </For>
                    </div>
                    <div class="refresh-row">
                        <button class="btn-refresh" on:click=move |_| (refresh)()>
                            "🔄 Refresh Data"
                        </button>
                    </div>
                </Layout>
            })
        }
    }
}
