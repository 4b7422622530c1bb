use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpProjectsApi;
use crate::config::ApiConfig;
use crate::context::ProjectsContext;

/// Provider component that owns one fetch lifecycle and exposes it to
/// its subtree via [`ProjectsContext`].
///
/// Wrap the part of the application that renders project data in this
/// component. On mount it issues the initial fetch (unless `auto_fetch`
/// is disabled), exactly like the first load of the page.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use portfolio_client::{ApiConfig, ProjectsProvider};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     let config = ApiConfig::new("http://localhost:8000").unwrap();
///
///     view! {
///         <ProjectsProvider config=config>
///             <ProjectList />
///         </ProjectsProvider>
///     }
/// }
/// ```
#[component]
pub fn ProjectsProvider(
    /// API configuration used to build the HTTP transport
    config: ApiConfig,
    /// Whether to automatically fetch on mount (default: true)
    #[prop(optional)]
    auto_fetch: Option<bool>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let auto_fetch = auto_fetch.unwrap_or(true);

    let ctx = ProjectsContext::new(Rc::new(HttpProjectsApi::new(&config)));
    provide_context(ctx);

    // Component bodies run once per mount, so this is the "fetch once on
    // mount" of the lifecycle contract.
    if auto_fetch {
        ctx.refresh();
    }

    children()
}
