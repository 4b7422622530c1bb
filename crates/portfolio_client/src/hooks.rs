use std::sync::Arc;

use leptos::prelude::*;
use portfolio_common::Project;

use crate::context::ProjectsContext;

/// Return value of [`use_projects`].
///
/// Mirrors the `(projects, is_loading, error, refresh)` tuple of the
/// fetch state: the three signals are mutually exclusive render branches
/// (loading wins, then error, then the list), and `refresh` re-runs the
/// fetch with identical semantics to the initial load.
#[derive(Clone)]
pub struct UseProjectsReturn {
    /// The fetched projects, in backend order; empty until the first
    /// successful fetch.
    pub projects: Signal<Vec<Project>>,
    /// Whether a fetch is currently in flight.
    pub is_loading: Signal<bool>,
    /// Human-readable message of the last failed fetch, if any.
    pub error: Signal<Option<String>>,
    /// Manually re-trigger the fetch.
    pub refresh: Arc<dyn Fn() + Send + Sync>,
}

/// Hook to consume the fetch lifecycle.
///
/// # Panics
///
/// Panics if called outside of a `ProjectsProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use portfolio_client::use_projects;
///
/// #[component]
/// fn ProjectCount() -> impl IntoView {
///     let projects = use_projects();
///     let count = projects.projects;
///
///     view! { <p>{move || count.get().len()} " projects"</p> }
/// }
/// ```
pub fn use_projects() -> UseProjectsReturn {
    let ctx = use_projects_context();
    UseProjectsReturn {
        projects: ctx.projects(),
        is_loading: ctx.is_loading(),
        error: ctx.error(),
        refresh: Arc::new(move || ctx.refresh()),
    }
}

/// Hook to access the raw [`ProjectsContext`].
///
/// Most components want [`use_projects`]; this is the escape hatch for
/// code that needs the context handle itself.
///
/// # Panics
///
/// Panics if called outside of a `ProjectsProvider` context.
pub fn use_projects_context() -> ProjectsContext {
    expect_context::<ProjectsContext>()
}
