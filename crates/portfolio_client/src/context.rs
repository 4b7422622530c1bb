use std::rc::Rc;

use leptos::prelude::*;
use portfolio_common::Project;

use crate::api::ProjectsApi;
use crate::state::FetchLifecycle;

/// Context providing access to the fetch lifecycle.
///
/// Provided by `ProjectsProvider` and consumed by the hooks in
/// `hooks.rs`. The lifecycle state machine lives in one `RwSignal`, so
/// every transition is a single reactive update; the transport is kept
/// in local (non-`Send`) storage because the WASM fetch client is not
/// `Send`, while the context handle itself stays `Copy + Send` and can
/// be moved into event callbacks freely.
#[derive(Clone, Copy)]
pub struct ProjectsContext {
    state: RwSignal<FetchLifecycle>,
    api: StoredValue<Rc<dyn ProjectsApi>, LocalStorage>,
}

impl ProjectsContext {
    /// Create a context around a transport.
    ///
    /// This is typically called by `ProjectsProvider`, not by user code;
    /// tests call it directly with a fake [`ProjectsApi`].
    pub fn new(api: Rc<dyn ProjectsApi>) -> Self {
        Self {
            state: RwSignal::new(FetchLifecycle::new()),
            api: StoredValue::new_local(api),
        }
    }

    /// Re-run the fetch: set loading, clear the previous error, issue one
    /// GET, and apply its completion unless a newer refresh superseded it.
    ///
    /// Calling this while a request is in flight is allowed; the older
    /// request keeps running (there is no cancellation primitive) but its
    /// completion is discarded, so the most recently issued refresh always
    /// wins regardless of network ordering.
    pub fn refresh(&self) {
        let Some(seq) = self.state.try_update(|state| state.begin()) else {
            // Provider already unmounted.
            return;
        };
        let Some(api) = self.api.try_get_value() else {
            return;
        };

        let state = self.state;
        leptos::task::spawn_local(async move {
            let result = api.fetch_projects().await;
            if let Err(err) = &result {
                log::warn!("projects fetch #{seq} failed: {err}");
            }
            // try_update: the signal is gone after unmount and the late
            // completion becomes a no-op instead of a panic.
            match state.try_update(|state| state.settle(seq, result)) {
                Some(false) => log::debug!("discarding stale completion for fetch #{seq}"),
                Some(true) | None => {}
            }
        });
    }

    /// Current project list, empty until the first successful fetch.
    pub fn projects(&self) -> Signal<Vec<Project>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.projects().to_vec()))
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    /// Message of the last failed fetch, cleared by the next refresh.
    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }
}
