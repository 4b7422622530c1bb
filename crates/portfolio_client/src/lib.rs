//! # Portfolio Client
//!
//! Reactive data-fetching library for the portfolio SPA with Leptos
//! integration.
//!
//! This library owns the fetch lifecycle of the project list: one GET
//! request per load or refresh, three derived render states (loading,
//! error, success), and a manual refresh trigger. Components consume it
//! through a provider/hook pair.
//!
//! ## Features
//!
//! - **Explicit configuration**: the API base URL is injected via
//!   [`ApiConfig`], never read from an ambient global, so the lifecycle is
//!   testable with any base URL or a fake transport.
//! - **Pluggable transport**: the [`ProjectsApi`] trait is the seam
//!   between lifecycle and network; [`HttpProjectsApi`] is the default.
//! - **Latest-refresh-wins**: overlapping refreshes are resolved with a
//!   per-request sequence number; stale completions are discarded instead
//!   of racing the winner.
//! - **Absorbed errors**: transport and API failures become one
//!   human-readable message in the error state, never a panic in the view.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_client::{use_projects, ApiConfig, ProjectsProvider};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let config = ApiConfig::new("http://localhost:8000").unwrap();
//!
//!     view! {
//!         <ProjectsProvider config=config>
//!             <ProjectList />
//!         </ProjectsProvider>
//!     }
//! }
//!
//! #[component]
//! fn ProjectList() -> impl IntoView {
//!     let state = use_projects();
//!     let projects = state.projects;
//!
//!     view! {
//!         <For
//!             each=move || projects.get()
//!             key=|project| project.id
//!             let:project
//!         >
//!             <p>{project.title}</p>
//!         </For>
//!     }
//! }
//! ```

// Module declarations
mod api;
mod config;
mod context;
mod error;
mod hooks;
mod provider;
mod state;

// Re-exports
pub use api::{decode_projects, HttpProjectsApi, ProjectsApi};
pub use config::ApiConfig;
pub use context::ProjectsContext;
pub use error::FetchError;
pub use hooks::{use_projects, use_projects_context, UseProjectsReturn};
pub use provider::ProjectsProvider;
pub use state::{FetchLifecycle, RequestSeq};

// Re-export the record type for convenience
pub use portfolio_common::Project;
